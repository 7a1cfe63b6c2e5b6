// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::Device;

/// Response from `get/devices`.
///
/// # Examples
///
/// ```
/// use reactled_lib::response::DevicesResponse;
///
/// let json = r#"{"devices": [{"name": "strip", "minFrequency": 20, "maxFrequency": 12000}]}"#;
/// let response: DevicesResponse = serde_json::from_str(json).unwrap();
/// let devices = response.into_devices().unwrap();
/// assert_eq!(devices[0].name(), "strip");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    devices: Option<Vec<Device>>,
}

impl DevicesResponse {
    /// Returns the device list.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the body has no `devices` field.
    pub fn into_devices(self) -> Result<Vec<Device>, ParseError> {
        self.devices
            .ok_or_else(|| ParseError::MissingField("devices".to_string()))
    }
}
