// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Global output brightness.
//!
//! The visualizer scales every device's output by a single brightness factor
//! between 0.0 (dark) and 1.0 (full).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValueError;

/// Brightness factor in the range `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use reactled_lib::types::Brightness;
///
/// let half = Brightness::new(0.5).unwrap();
/// assert!((half.value() - 0.5).abs() < f32::EPSILON);
///
/// assert!(Brightness::new(1.2).is_err());
/// assert!(Brightness::new(f32::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Brightness(f32);

impl Brightness {
    /// Lights off.
    pub const MIN: Self = Self(0.0);

    /// Full output. Also the value a fresh view state starts with.
    pub const MAX: Self = Self(1.0);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidBrightness` if the value is outside
    /// `[0.0, 1.0]` or is NaN.
    pub fn new(value: f32) -> Result<Self, ValueError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValueError::InvalidBrightness(value));
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping into `[0.0, 1.0]`.
    ///
    /// NaN maps to [`Brightness::MIN`].
    #[must_use]
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw factor.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Returns the brightness as a whole percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_percent(&self) -> u8 {
        // Safe: value is within [0, 1], so the product is within [0, 100]
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f32> for Brightness {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Brightness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f32::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_bounds() {
        assert!(Brightness::new(0.0).is_ok());
        assert!(Brightness::new(1.0).is_ok());
        assert!(Brightness::new(-0.01).is_err());
        assert!(Brightness::new(1.01).is_err());
    }

    #[test]
    fn brightness_clamped() {
        assert_eq!(Brightness::clamped(2.0), Brightness::MAX);
        assert_eq!(Brightness::clamped(-1.0), Brightness::MIN);
        assert_eq!(Brightness::clamped(f32::NAN), Brightness::MIN);
    }

    #[test]
    fn brightness_as_percent() {
        assert_eq!(Brightness::new(0.76).unwrap().as_percent(), 76);
        assert_eq!(Brightness::MAX.as_percent(), 100);
    }

    #[test]
    fn brightness_display_is_plain_number() {
        assert_eq!(Brightness::new(0.25).unwrap().to_string(), "0.25");
        assert_eq!(Brightness::MAX.to_string(), "1");
    }

    #[test]
    fn brightness_deserialize_rejects_out_of_range() {
        let ok: Brightness = serde_json::from_str("0.3").unwrap();
        assert!((ok.value() - 0.3).abs() < f32::EPSILON);
        assert!(serde_json::from_str::<Brightness>("3.0").is_err());
    }
}
