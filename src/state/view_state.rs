// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View state tracking.

use crate::error::Error;
use crate::types::{
    ALL_DEVICES, Brightness, Device, EffectOption, Frequency, FrequencyBound, REACTIVE,
};

use super::ViewChange;

/// Position of the active effect option inside the active device's catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EffectSlot {
    category: String,
    index: usize,
}

/// Everything a control UI renders.
///
/// The active device and active effect option are stored as positions, and
/// every mutation keeps them pointing at entries that exist in the current
/// device list.
///
/// # Examples
///
/// ```
/// use reactled_lib::state::{ViewChange, ViewState};
/// use reactled_lib::types::{Device, EffectOption, REACTIVE};
///
/// let mut state = ViewState::new();
/// state.apply(&ViewChange::Devices(vec![
///     Device::new("strip", 20, 12000).with_effect(REACTIVE, EffectOption::new("Energy")),
/// ]));
///
/// // The synthetic "All" entry is appended
/// assert_eq!(state.devices().len(), 2);
/// assert_eq!(state.devices()[1].name(), "All");
///
/// assert_eq!(state.active_device().unwrap().name(), "strip");
/// assert_eq!(state.active_effect_option().unwrap().name(), "Energy");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    devices: Vec<Device>,
    active_device: Option<usize>,
    active_effect: Option<EffectSlot>,
    brightness: Brightness,
    synced: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            devices: Vec::new(),
            active_device: None,
            active_effect: None,
            brightness: Brightness::MAX,
            synced: false,
        }
    }
}

impl ViewState {
    /// Creates an empty view state at full brightness.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    /// Returns the displayed device list, including the `"All"` entry.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Returns the active device.
    #[must_use]
    pub fn active_device(&self) -> Option<&Device> {
        self.active_device.and_then(|idx| self.devices.get(idx))
    }

    /// Returns the active effect option of the active device.
    #[must_use]
    pub fn active_effect_option(&self) -> Option<&EffectOption> {
        let slot = self.active_effect.as_ref()?;
        self.active_device()?.effect(&slot.category, slot.index)
    }

    /// Returns the category of the active effect option.
    #[must_use]
    pub fn active_effect_category(&self) -> Option<&str> {
        self.active_effect.as_ref().map(|slot| slot.category.as_str())
    }

    /// Returns the global brightness.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Returns the sync flag.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    // ========== Predicates ==========

    /// Returns `true` if `device` has the name of the active device.
    #[must_use]
    pub fn is_active_device(&self, device: &Device) -> bool {
        self.active_device()
            .is_some_and(|active| active.name() == device.name())
    }

    /// Returns `true` if `option` has the name of the active effect option.
    #[must_use]
    pub fn is_active_option(&self, option: &EffectOption) -> bool {
        self.active_effect_option()
            .is_some_and(|active| active.name() == option.name())
    }

    // ========== Selection ==========

    /// Makes the device named `name` active.
    ///
    /// The active effect option follows by name when the new device has an
    /// effect of the same name, and falls back to its first reactive effect
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no listed device has this name.
    pub fn select_device(&mut self, name: &str) -> Result<(), Error> {
        let idx = self
            .devices
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| Error::DeviceNotFound(name.to_string()))?;

        let previous_effect = self.active_effect_option().map(|e| e.name().to_string());
        self.active_device = Some(idx);
        self.active_effect = previous_effect
            .and_then(|name| self.slot_by_name(&name))
            .or_else(|| self.first_reactive_slot());
        Ok(())
    }

    /// Makes the effect named `name` of the active device the active option.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveDevice` if no device is active, or
    /// `Error::EffectNotFound` if the active device has no such effect.
    pub fn select_effect_option(&mut self, name: &str) -> Result<(), Error> {
        if self.active_device().is_none() {
            return Err(Error::NoActiveDevice);
        }
        let slot = self
            .slot_by_name(name)
            .ok_or_else(|| Error::EffectNotFound(name.to_string()))?;
        self.active_effect = Some(slot);
        Ok(())
    }

    fn slot_by_name(&self, name: &str) -> Option<EffectSlot> {
        self.active_device()?
            .find_effect(name)
            .map(|(category, index)| EffectSlot {
                category: category.to_string(),
                index,
            })
    }

    fn first_reactive_slot(&self) -> Option<EffectSlot> {
        let device = self.active_device()?;
        (!device.effects_in(REACTIVE).is_empty()).then(|| EffectSlot {
            category: REACTIVE.to_string(),
            index: 0,
        })
    }

    // ========== Frequency ==========

    /// Enforces `min < max` on the active device before a bound change.
    ///
    /// A new maximum at or below the current minimum moves the local minimum
    /// to the requested value; a new minimum at or above the current maximum
    /// moves the local maximum. Returns `true` when such a local clamp
    /// happened, in which case nothing should be sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveDevice` if no device is active.
    pub fn clamp_frequency(
        &mut self,
        bound: FrequencyBound,
        value: Frequency,
    ) -> Result<bool, Error> {
        let idx = self.active_device.ok_or(Error::NoActiveDevice)?;
        let device = self.devices.get_mut(idx).ok_or(Error::NoActiveDevice)?;
        let hz = value.hz();

        match bound {
            FrequencyBound::Max if device.min_frequency() >= hz => {
                device.set_min_frequency(hz);
                Ok(true)
            }
            FrequencyBound::Min if device.max_frequency() <= hz => {
                device.set_max_frequency(hz);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // ========== Change application ==========

    /// Applies a change to this state.
    ///
    /// Returns `true` if the state actually changed.
    ///
    /// While sync is on, effect and option changes land on every device, the
    /// way the server applies them.
    pub fn apply(&mut self, change: &ViewChange) -> bool {
        match change {
            ViewChange::Devices(devices) => self.replace_devices(devices.clone()),
            ViewChange::Brightness(value) => {
                let changed = self.brightness != *value;
                self.brightness = *value;
                changed
            }
            ViewChange::Synced(value) => {
                let changed = self.synced != *value;
                self.synced = *value;
                changed
            }
            ViewChange::CurrentEffect { device, effect } => {
                let mut changed = false;
                for idx in self.effect_targets(device) {
                    let target = &mut self.devices[idx];
                    if target.current_effect() != effect {
                        target.set_current_effect(effect.clone());
                        changed = true;
                    }
                }
                changed
            }
            ViewChange::Frequency { device, bound, hz } => {
                let mut changed = false;
                for target in self.devices.iter_mut().filter(|d| d.name() == device) {
                    let current = match bound {
                        FrequencyBound::Min => target.min_frequency(),
                        FrequencyBound::Max => target.max_frequency(),
                    };
                    if current != *hz {
                        match bound {
                            FrequencyBound::Min => target.set_min_frequency(*hz),
                            FrequencyBound::Max => target.set_max_frequency(*hz),
                        }
                        changed = true;
                    }
                }
                changed
            }
            ViewChange::OptionValue {
                device,
                effect,
                option,
                value,
            } => {
                let mut changed = false;
                for idx in self.effect_targets(device) {
                    let target = &mut self.devices[idx];
                    let Some((category, pos)) = target
                        .find_effect(effect)
                        .map(|(c, p)| (c.to_string(), p))
                    else {
                        continue;
                    };
                    if let Some(entry) = target.effect_mut(&category, pos)
                        && entry.current_option(option) != Some(value)
                    {
                        entry.set_current_option(option.clone(), value.clone());
                        changed = true;
                    }
                }
                changed
            }
        }
    }

    fn replace_devices(&mut self, mut devices: Vec<Device>) -> bool {
        if let Some(first) = devices.first() {
            let all = first.renamed(ALL_DEVICES);
            devices.push(all);
        }

        let before = (self.active_device, self.active_effect.clone());
        let list_changed = self.devices != devices;

        self.devices = devices;
        self.active_device = (!self.devices.is_empty()).then_some(0);
        self.active_effect = self.first_reactive_slot();

        list_changed || before != (self.active_device, self.active_effect.clone())
    }

    fn effect_targets(&self, device: &str) -> Vec<usize> {
        self.devices
            .iter()
            .enumerate()
            .filter(|(_, d)| self.synced || d.name() == device)
            .map(|(idx, _)| idx)
            .collect()
    }
}
