// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sync flag commands.
//!
//! While sync is on, the server applies effect and option changes to every
//! device instead of only the addressed one.

use super::Command;

/// Query or assign the global sync flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncCommand {
    /// `get/sync`
    Get,
    /// `set/sync?sync=<bool>`
    Set(bool),
}

impl Command for SyncCommand {
    fn path(&self) -> String {
        match self {
            Self::Get => "get/sync",
            Self::Set(_) => "set/sync",
        }
        .to_string()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Get => Vec::new(),
            Self::Set(on) => vec![("sync", on.to_string())],
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
    fn sync_set_params() {
        let cmd = SyncCommand::Set(false);
        assert_eq!(cmd.path(), "set/sync");
        assert_eq!(cmd.query_string(), "sync=false");
    }

    #[test]
    fn sync_get() {
        assert_eq!(SyncCommand::Get.path(), "get/sync");
        assert!(SyncCommand::Get.params().is_empty());
    }
}
