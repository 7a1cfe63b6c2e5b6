// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::Brightness;

/// Response from `get/brightness`, e.g. `{"brightness": 0.75}`.
///
/// Values outside `[0, 1]` fail to deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct BrightnessResponse {
    #[serde(default)]
    brightness: Option<Brightness>,
}

impl BrightnessResponse {
    /// Returns the reported brightness.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the body has no `brightness` field.
    pub fn brightness(&self) -> Result<Brightness, ParseError> {
        self.brightness
            .ok_or_else(|| ParseError::MissingField("brightness".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_brightness() {
        let response: BrightnessResponse =
            serde_json::from_str(r#"{"brightness": 0.5}"#).unwrap();
        assert!((response.brightness().unwrap().value() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn out_of_range_brightness_fails() {
        assert!(serde_json::from_str::<BrightnessResponse>(r#"{"brightness": 4}"#).is_err());
    }
}
