// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Global brightness commands.

use super::Command;
use crate::types::Brightness;

/// Query or assign the global brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrightnessCommand {
    /// `get/brightness`
    Get,
    /// `set/brightness?brightness=<0.0-1.0>`
    Set(Brightness),
}

impl Command for BrightnessCommand {
    fn path(&self) -> String {
        match self {
            Self::Get => "get/brightness",
            Self::Set(_) => "set/brightness",
        }
        .to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Get => Vec::new(),
            Self::Set(value) => vec![("brightness", value.to_string())],
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_set() {
        let cmd = BrightnessCommand::Set(Brightness::new(0.8).unwrap());
        assert_eq!(cmd.path(), "set/brightness");
        assert_eq!(cmd.params(), vec![("brightness", "0.8".to_string())]);
    }

    #[test]
    fn brightness_get() {
        assert_eq!(BrightnessCommand::Get.path(), "get/brightness");
        assert!(!BrightnessCommand::Get.is_retryable());
    }
}
