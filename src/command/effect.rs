// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Effect selection and effect option commands.

use serde_json::Value;

use super::Command;

/// Switches the running effect of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectCommand {
    device: String,
    effect: String,
}

impl EffectCommand {
    /// Creates a command that runs `effect` on `device`.
    #[must_use]
    pub fn new(device: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            effect: effect.into(),
        }
    }

    /// Returns the effect name.
    #[must_use]
    pub fn effect(&self) -> &str {
        &self.effect
    }
}

impl Command for EffectCommand {
    fn path(&self) -> String {
        "set/effect".to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("device", self.device.clone()),
            ("effect", self.effect.clone()),
        ]
    }

    fn is_retryable(&self) -> bool {
        true
    }
}

/// Assigns one option of an effect.
///
/// The value travels as the JSON text `{"value": <value>}` so the server can
/// recover its type.
///
/// # Examples
///
/// ```
/// use reactled_lib::command::{Command, OptionCommand};
/// use serde_json::json;
///
/// let cmd = OptionCommand::new("strip", "Energy", "blur", json!(2.5));
/// assert_eq!(cmd.encoded_value(), r#"{"value":2.5}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionCommand {
    device: String,
    effect: String,
    option: String,
    value: Value,
}

impl OptionCommand {
    /// Creates a command setting `option` of `effect` on `device`.
    #[must_use]
    pub fn new(
        device: impl Into<String>,
        effect: impl Into<String>,
        option: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            device: device.into(),
            effect: effect.into(),
            option: option.into(),
            value,
        }
    }

    /// Returns the option key.
    #[must_use]
    pub fn option(&self) -> &str {
        &self.option
    }

    /// Returns the unencoded value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the value as sent on the wire.
    #[must_use]
    pub fn encoded_value(&self) -> String {
        serde_json::json!({ "value": self.value }).to_string()
    }
}

impl Command for OptionCommand {
    fn path(&self) -> String {
        "set/option".to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("device", self.device.clone()),
            ("effect", self.effect.clone()),
            ("option", self.option.clone()),
            ("value", self.encoded_value()),
        ]
    }

    fn is_retryable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn effect_params() {
        let cmd = EffectCommand::new("strip", "Wave");
        assert_eq!(cmd.path(), "set/effect");
        assert_eq!(
            cmd.params(),
            vec![("device", "strip".to_string()), ("effect", "Wave".to_string())]
        );
    }

    #[test]
    fn option_value_is_wrapped_json() {
        let cmd = OptionCommand::new("strip", "Scroll", "lows_color", json!("Red"));
        assert_eq!(cmd.encoded_value(), r#"{"value":"Red"}"#);

        let cmd = OptionCommand::new("strip", "Energy", "mirror", json!(false));
        assert_eq!(cmd.params()[3], ("value", r#"{"value":false}"#.to_string()));
    }

    #[test]
    fn option_query_string_is_encoded() {
        let cmd = OptionCommand::new("strip", "Energy", "blur", json!(1));
        assert_eq!(
            cmd.query_string(),
            "device=strip&effect=Energy&option=blur&value=%7B%22value%22%3A1%7D"
        );
    }
}
