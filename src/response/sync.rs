// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sync flag response parsing.

use serde::Deserialize;

use crate::error::ParseError;

/// Response from `get/sync`, e.g. `{"sync": true}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncResponse {
    #[serde(default)]
    sync: Option<bool>,
}

impl SyncResponse {
    /// Returns the sync flag.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the body has no `sync` field.
    pub fn sync(&self) -> Result<bool, ParseError> {
        self.sync
            .ok_or_else(|| ParseError::MissingField("sync".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sync() {
        let on: SyncResponse = serde_json::from_str(r#"{"sync": true}"#).unwrap();
        let off: SyncResponse = serde_json::from_str(r#"{"sync": false}"#).unwrap();
        assert!(on.sync().unwrap());
        assert!(!off.sync().unwrap());
    }

    #[test]
    fn missing_sync() {
        let response: SyncResponse = serde_json::from_str("{}").unwrap();
        assert!(response.sync().is_err());
    }
}
