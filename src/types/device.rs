// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device and effect catalogue as reported by `get/devices`.
//!
//! A device entry looks like:
//!
//! ```json
//! {
//!   "name": "strip",
//!   "minFrequency": 20,
//!   "maxFrequency": 12000,
//!   "currentEffect": "Energy",
//!   "effects": {
//!     "reactive": [
//!       {
//!         "name": "Energy",
//!         "current_options": {"blur": 1.0, "mirror": true},
//!         "options": [
//!           {"k": "blur", "name": "Blur", "type": "float_slider", "config": [0.1, 4.0, 0.1]},
//!           {"k": "mirror", "name": "Mirror", "type": "checkbox"}
//!         ]
//!       }
//!     ],
//!     "nreactive": []
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the synthetic entry that addresses every device at once.
pub const ALL_DEVICES: &str = "All";

/// Effect category for audio-reactive effects.
pub const REACTIVE: &str = "reactive";

/// Effect category for effects that ignore audio input.
pub const NON_REACTIVE: &str = "nreactive";

/// A controllable lighting unit with frequency bounds and an effect catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    name: String,
    min_frequency: u32,
    max_frequency: u32,
    #[serde(default)]
    current_effect: String,
    #[serde(default)]
    effects: BTreeMap<String, Vec<EffectOption>>,
}

impl Device {
    /// Creates a device with an empty effect catalogue.
    #[must_use]
    pub fn new(name: impl Into<String>, min_frequency: u32, max_frequency: u32) -> Self {
        Self {
            name: name.into(),
            min_frequency,
            max_frequency,
            current_effect: String::new(),
            effects: BTreeMap::new(),
        }
    }

    /// Adds an effect to a category.
    #[must_use]
    pub fn with_effect(mut self, category: impl Into<String>, effect: EffectOption) -> Self {
        self.effects.entry(category.into()).or_default().push(effect);
        self
    }

    /// Sets the running effect name.
    #[must_use]
    pub fn with_current_effect(mut self, effect: impl Into<String>) -> Self {
        self.current_effect = effect.into();
        self
    }

    /// Returns a copy of this device under a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` for the synthetic entry that addresses all devices.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.name == ALL_DEVICES
    }

    /// Returns the lower analysed frequency in Hz.
    #[must_use]
    pub fn min_frequency(&self) -> u32 {
        self.min_frequency
    }

    /// Returns the upper analysed frequency in Hz.
    #[must_use]
    pub fn max_frequency(&self) -> u32 {
        self.max_frequency
    }

    /// Returns the name of the running effect.
    #[must_use]
    pub fn current_effect(&self) -> &str {
        &self.current_effect
    }

    /// Returns the full effect catalogue keyed by category.
    #[must_use]
    pub fn effects(&self) -> &BTreeMap<String, Vec<EffectOption>> {
        &self.effects
    }

    /// Returns the effects of one category, empty if the category is absent.
    #[must_use]
    pub fn effects_in(&self, category: &str) -> &[EffectOption] {
        self.effects.get(category).map_or(&[], Vec::as_slice)
    }

    /// Finds an effect by name in any category.
    ///
    /// Returns the category and the position within it.
    #[must_use]
    pub fn find_effect(&self, name: &str) -> Option<(&str, usize)> {
        self.effects.iter().find_map(|(category, list)| {
            list.iter()
                .position(|e| e.name == name)
                .map(|idx| (category.as_str(), idx))
        })
    }

    /// Returns the effect at `index` within `category`.
    #[must_use]
    pub fn effect(&self, category: &str, index: usize) -> Option<&EffectOption> {
        self.effects.get(category).and_then(|list| list.get(index))
    }

    pub(crate) fn effect_mut(&mut self, category: &str, index: usize) -> Option<&mut EffectOption> {
        self.effects
            .get_mut(category)
            .and_then(|list| list.get_mut(index))
    }

    pub(crate) fn set_current_effect(&mut self, effect: impl Into<String>) {
        self.current_effect = effect.into();
    }

    pub(crate) fn set_min_frequency(&mut self, hz: u32) {
        self.min_frequency = hz;
    }

    pub(crate) fn set_max_frequency(&mut self, hz: u32) {
        self.max_frequency = hz;
    }
}

/// An effect entry of a device together with its tunable options.
///
/// Keys the library does not model are kept in [`extra`](Self::extra) so a
/// UI can still display them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectOption {
    name: String,
    #[serde(default)]
    current_options: Map<String, Value>,
    #[serde(default)]
    options: Vec<OptionDescriptor>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl EffectOption {
    /// Creates an effect with no options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_options: Map::new(),
            options: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Adds an option descriptor and its current value.
    #[must_use]
    pub fn with_option(mut self, descriptor: OptionDescriptor, current: Value) -> Self {
        self.current_options
            .insert(descriptor.key.clone(), current);
        self.options.push(descriptor);
        self
    }

    /// Returns the effect name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current value of every option.
    #[must_use]
    pub fn current_options(&self) -> &Map<String, Value> {
        &self.current_options
    }

    /// Returns the current value of one option.
    #[must_use]
    pub fn current_option(&self, key: &str) -> Option<&Value> {
        self.current_options.get(key)
    }

    /// Returns the option descriptors in display order.
    #[must_use]
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// Returns the descriptor for an option key.
    #[must_use]
    pub fn descriptor(&self, key: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|d| d.key == key)
    }

    /// Returns unmodelled fields of the effect entry.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub(crate) fn set_current_option(&mut self, key: impl Into<String>, value: Value) {
        self.current_options.insert(key.into(), value);
    }
}

/// Describes how an effect option is edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Option key used in `set/option`.
    #[serde(rename = "k")]
    pub key: String,
    /// Human readable label.
    pub name: String,
    /// Widget kind.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Widget configuration: `[min, max, step]` for sliders, the choices for
    /// dropdowns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl OptionDescriptor {
    /// Creates a descriptor without widget configuration.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            config: None,
        }
    }

    /// Attaches widget configuration.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Returns `(min, max, step)` for slider options.
    #[must_use]
    pub fn slider_range(&self) -> Option<(f64, f64, f64)> {
        if !matches!(self.kind, OptionKind::Slider | OptionKind::FloatSlider) {
            return None;
        }
        match self.config.as_ref()?.as_array()?.as_slice() {
            [min, max, step] => Some((min.as_f64()?, max.as_f64()?, step.as_f64()?)),
            _ => None,
        }
    }

    /// Returns the selectable values for dropdown options.
    ///
    /// The server sends either a list of names or a map keyed by name.
    #[must_use]
    pub fn choices(&self) -> Vec<String> {
        if self.kind != OptionKind::Dropdown {
            return Vec::new();
        }
        match &self.config {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

/// Widget kind of an effect option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Integer slider.
    Slider,
    /// Floating point slider.
    FloatSlider,
    /// Boolean toggle.
    Checkbox,
    /// One of a fixed set of names.
    Dropdown,
    /// Any kind this library does not know about.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn energy_json() -> Value {
        json!({
            "name": "strip",
            "minFrequency": 20,
            "maxFrequency": 12000,
            "currentEffect": "Energy",
            "effects": {
                "reactive": [{
                    "name": "Energy",
                    "current_options": {"blur": 1.0, "mirror": true},
                    "options": [
                        {"k": "blur", "name": "Blur", "type": "float_slider", "config": [0.1, 4.0, 0.1]},
                        {"k": "mirror", "name": "Mirror", "type": "checkbox"},
                        {"k": "color_mode", "name": "Color Mode", "type": "dropdown",
                         "config": {"Spectral": [], "Sunset": []}}
                    ]
                }],
                "nreactive": [{"name": "Fade", "current_options": {}, "options": []}]
            }
        })
    }

    #[test]
    fn parse_device() {
        let device: Device = serde_json::from_value(energy_json()).unwrap();

        assert_eq!(device.name(), "strip");
        assert_eq!(device.min_frequency(), 20);
        assert_eq!(device.max_frequency(), 12000);
        assert_eq!(device.current_effect(), "Energy");
        assert_eq!(device.effects_in(REACTIVE).len(), 1);
        assert_eq!(device.effects_in(NON_REACTIVE)[0].name(), "Fade");
        assert!(device.effects_in("missing").is_empty());
    }

    #[test]
    fn parse_effect_options() {
        let device: Device = serde_json::from_value(energy_json()).unwrap();
        let energy = &device.effects_in(REACTIVE)[0];

        assert_eq!(energy.current_option("mirror"), Some(&json!(true)));
        let blur = energy.descriptor("blur").unwrap();
        assert_eq!(blur.kind, OptionKind::FloatSlider);
        assert_eq!(blur.slider_range(), Some((0.1, 4.0, 0.1)));

        let mode = energy.descriptor("color_mode").unwrap();
        assert_eq!(mode.choices(), vec!["Spectral".to_string(), "Sunset".to_string()]);
        assert!(mode.slider_range().is_none());
    }

    #[test]
    fn unknown_option_kind_is_tolerated() {
        let d: OptionDescriptor =
            serde_json::from_value(json!({"k": "x", "name": "X", "type": "color_picker"})).unwrap();
        assert_eq!(d.kind, OptionKind::Unknown);
    }

    #[test]
    fn unmodelled_effect_fields_are_kept() {
        let e: EffectOption =
            serde_json::from_value(json!({"name": "Stars", "speed_hint": 3})).unwrap();
        assert_eq!(e.extra().get("speed_hint"), Some(&json!(3)));
        assert!(e.options().is_empty());
    }

    #[test]
    fn find_effect_across_categories() {
        let device: Device = serde_json::from_value(energy_json()).unwrap();
        assert_eq!(device.find_effect("Fade"), Some((NON_REACTIVE, 0)));
        assert_eq!(device.find_effect("Energy"), Some((REACTIVE, 0)));
        assert_eq!(device.find_effect("Nope"), None);
    }

    #[test]
    fn renamed_copies_everything_else() {
        let device: Device = serde_json::from_value(energy_json()).unwrap();
        let all = device.renamed(ALL_DEVICES);

        assert!(all.is_all());
        assert_eq!(all.max_frequency(), device.max_frequency());
        assert_eq!(all.effects(), device.effects());
    }
}
