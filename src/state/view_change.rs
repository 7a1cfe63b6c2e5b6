// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View state change representation.
//!
//! A [`ViewChange`] is what a server response turns into before it touches
//! the [`ViewState`](super::ViewState). Changes address devices by name, so a
//! response that arrives after the device list was refetched lands on the
//! matching entry or is dropped.
//!
//! # Examples
//!
//! ```
//! use reactled_lib::state::{ViewChange, ViewState};
//!
//! let mut state = ViewState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&ViewChange::Synced(true)));
//!
//! // Applying same change again returns false
//! assert!(!state.apply(&ViewChange::Synced(true)));
//! ```

use serde_json::Value;

use crate::types::{Brightness, Device, FrequencyBound};

/// A change to the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewChange {
    /// A freshly fetched device list, without the synthetic `"All"` entry.
    Devices(Vec<Device>),

    /// Global brightness changed.
    Brightness(Brightness),

    /// Sync flag changed.
    Synced(bool),

    /// A device now runs a different effect.
    CurrentEffect {
        /// Device name.
        device: String,
        /// Effect name.
        effect: String,
    },

    /// One edge of a device's frequency band moved.
    Frequency {
        /// Device name.
        device: String,
        /// Which edge.
        bound: FrequencyBound,
        /// New value in Hz.
        hz: u32,
    },

    /// An effect option took a new value.
    OptionValue {
        /// Device name.
        device: String,
        /// Effect name.
        effect: String,
        /// Option key.
        option: String,
        /// New value.
        value: Value,
    },
}

impl ViewChange {
    /// Creates an effect change.
    #[must_use]
    pub fn current_effect(device: impl Into<String>, effect: impl Into<String>) -> Self {
        Self::CurrentEffect {
            device: device.into(),
            effect: effect.into(),
        }
    }

    /// Creates a frequency change.
    #[must_use]
    pub fn frequency(device: impl Into<String>, bound: FrequencyBound, hz: u32) -> Self {
        Self::Frequency {
            device: device.into(),
            bound,
            hz,
        }
    }

    /// Creates an option value change.
    #[must_use]
    pub fn option_value(
        device: impl Into<String>,
        effect: impl Into<String>,
        option: impl Into<String>,
        value: Value,
    ) -> Self {
        Self::OptionValue {
            device: device.into(),
            effect: effect.into(),
            option: option.into(),
            value,
        }
    }

    /// Returns the device this change targets, if it targets one.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        match self {
            Self::CurrentEffect { device, .. }
            | Self::Frequency { device, .. }
            | Self::OptionValue { device, .. } => Some(device),
            Self::Devices(_) | Self::Brightness(_) | Self::Synced(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_target() {
        assert_eq!(ViewChange::current_effect("strip", "Fade").device(), Some("strip"));
        assert_eq!(
            ViewChange::frequency("bar", FrequencyBound::Min, 40).device(),
            Some("bar")
        );
        assert_eq!(ViewChange::Synced(true).device(), None);
    }
}
