// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device catalogue query.

use super::Command;

/// Lists every device with its frequency range and effect catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevicesCommand {
    /// `get/devices`
    Get,
}

impl Command for DevicesCommand {
    fn path(&self) -> String {
        "get/devices".to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devices_get() {
        assert_eq!(DevicesCommand::Get.path(), "get/devices");
        assert!(DevicesCommand::Get.params().is_empty());
    }
}
