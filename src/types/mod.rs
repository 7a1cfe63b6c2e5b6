// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value and model types for visualizer control.
//!
//! Numeric values are range checked at construction time so a request built
//! from them is always well formed.
//!
//! # Types
//!
//! - [`Brightness`] - Global output factor (0.0-1.0)
//! - [`Frequency`] - Band edge in Hz (0-20000)
//! - [`FrequencyBound`] - Which edge of the band a change targets
//! - [`Device`] - A lighting unit and its effect catalogue
//! - [`EffectOption`] - One effect with its tunable options
//! - [`OptionDescriptor`] / [`OptionKind`] - How an option is edited

mod brightness;
mod device;
mod frequency;

pub use brightness::Brightness;
pub use device::{
    ALL_DEVICES, Device, EffectOption, NON_REACTIVE, OptionDescriptor, OptionKind, REACTIVE,
};
pub use frequency::{Frequency, FrequencyBound};
