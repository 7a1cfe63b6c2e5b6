// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frequency bounds for a device's analysed audio band.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A frequency in Hz, within the audible window `[0, 20000]`.
///
/// # Examples
///
/// ```
/// use reactled_lib::types::Frequency;
///
/// let f = Frequency::new(200).unwrap();
/// assert_eq!(f.hz(), 200);
/// assert!(Frequency::new(25_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Frequency(u32);

impl Frequency {
    /// Lowest accepted frequency.
    pub const MIN: Self = Self(0);

    /// Highest accepted frequency.
    pub const MAX: Self = Self(20_000);

    /// Creates a new frequency.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFrequency` if `hz` exceeds 20000.
    pub fn new(hz: u32) -> Result<Self, ValueError> {
        if hz > Self::MAX.0 {
            return Err(ValueError::InvalidFrequency {
                min: Self::MIN.0,
                max: Self::MAX.0,
                actual: hz,
            });
        }
        Ok(Self(hz))
    }

    /// Returns the frequency in Hz.
    #[must_use]
    pub const fn hz(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Frequency {
    type Error = ValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Frequency> for u32 {
    fn from(value: Frequency) -> Self {
        value.0
    }
}

/// Which end of a device's frequency range a change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyBound {
    /// Lower bound.
    Min,
    /// Upper bound.
    Max,
}

impl FrequencyBound {
    /// Returns the API path segment for this bound.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for FrequencyBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
