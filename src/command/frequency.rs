// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frequency range commands.

use super::Command;
use crate::types::{Frequency, FrequencyBound};

/// Moves one edge of a device's analysed frequency band.
///
/// # Examples
///
/// ```
/// use reactled_lib::command::{Command, FrequencyCommand};
/// use reactled_lib::types::{Frequency, FrequencyBound};
///
/// let cmd = FrequencyCommand::new(FrequencyBound::Max, "strip", Frequency::new(8000).unwrap());
/// assert_eq!(cmd.path(), "set/frequency/max");
/// assert_eq!(cmd.query_string(), "value=8000&device=strip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyCommand {
    bound: FrequencyBound,
    device: String,
    value: Frequency,
}

impl FrequencyCommand {
    /// Creates a command moving `bound` of `device` to `value`.
    #[must_use]
    pub fn new(bound: FrequencyBound, device: impl Into<String>, value: Frequency) -> Self {
        Self {
            bound,
            device: device.into(),
            value,
        }
    }

    /// Returns the targeted bound.
    #[must_use]
    pub fn bound(&self) -> FrequencyBound {
        self.bound
    }

    /// Returns the requested frequency.
    #[must_use]
    pub fn value(&self) -> Frequency {
        self.value
    }
}

impl Command for FrequencyCommand {
    fn path(&self) -> String {
        format!("set/frequency/{}", self.bound)
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("value", self.value.to_string()),
            ("device", self.device.clone()),
        ]
    }

    fn is_retryable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_min_path() {
        let cmd = FrequencyCommand::new(FrequencyBound::Min, "All", Frequency::new(60).unwrap());
        assert_eq!(cmd.path(), "set/frequency/min");
        assert_eq!(
            cmd.params(),
            vec![("value", "60".to_string()), ("device", "All".to_string())]
        );
    }
}
