// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Visualizer API command definitions.
//!
//! Every command maps to one `GET /api/<path>?<params>` request.
//!
//! # Available Commands
//!
//! | Command Type | Path | Parameters |
//! |-------------|------|------------|
//! | [`DevicesCommand`] | `get/devices` | - |
//! | [`SyncCommand`] | `get/sync`, `set/sync` | `sync` |
//! | [`BrightnessCommand`] | `get/brightness`, `set/brightness` | `brightness` |
//! | [`EffectCommand`] | `set/effect` | `device`, `effect` |
//! | [`FrequencyCommand`] | `set/frequency/min`, `set/frequency/max` | `value`, `device` |
//! | [`OptionCommand`] | `set/option` | `device`, `effect`, `option`, `value` |
//!
//! # Examples
//!
//! ```
//! use reactled_lib::command::{BrightnessCommand, Command};
//! use reactled_lib::types::Brightness;
//!
//! let cmd = BrightnessCommand::Set(Brightness::new(0.5).unwrap());
//! assert_eq!(cmd.path(), "set/brightness");
//! assert_eq!(cmd.query_string(), "brightness=0.5");
//! assert!(cmd.is_retryable());
//! ```

mod brightness;
mod devices;
mod effect;
mod frequency;
mod sync;

pub use brightness::BrightnessCommand;
pub use devices::DevicesCommand;
pub use effect::{EffectCommand, OptionCommand};
pub use frequency::FrequencyCommand;
pub use sync::SyncCommand;

/// A request that can be sent to the visualizer API.
pub trait Command {
    /// Returns the endpoint path below the API prefix, e.g. `"get/devices"`.
    fn path(&self) -> String;

    /// Returns the query parameters in send order.
    fn params(&self) -> Vec<(&'static str, String)>;

    /// Returns `true` if the command only assigns a value and may be
    /// re-issued after a transport failure.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Returns the URL-encoded query string, without the leading `?`.
    fn query_string(&self) -> String {
        self.params()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_encodes_values() {
        let cmd = EffectCommand::new("living room", "Energy");
        assert_eq!(cmd.query_string(), "device=living%20room&effect=Energy");
    }

    #[test]
    fn query_string_empty_without_params() {
        assert_eq!(DevicesCommand::Get.query_string(), "");
    }

    #[test]
    fn getters_are_not_retryable() {
        assert!(!DevicesCommand::Get.is_retryable());
        assert!(!SyncCommand::Get.is_retryable());
        assert!(!BrightnessCommand::Get.is_retryable());
        assert!(SyncCommand::Set(true).is_retryable());
    }
}
