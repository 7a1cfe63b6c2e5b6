// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View controller for a visualizer server.
//!
//! A [`Controller`] owns a transport and a [`ViewState`]. Each action either
//! mutates the state locally or sends one command and mirrors the answer into
//! the state. Nothing is written back when a request fails; the error is
//! returned to the caller instead.
//!
//! ```no_run
//! use reactled_lib::Controller;
//! use reactled_lib::types::{Brightness, Frequency};
//!
//! # async fn example() -> reactled_lib::Result<()> {
//! let controller = Controller::http("192.168.1.20")?;
//!
//! controller.refresh_devices().await?;
//! controller.set_brightness(Brightness::new(0.6)?).await?;
//! controller.set_effect("Spectrum").await?;
//! controller.set_max_frequency(Frequency::new(8000)?).await?;
//!
//! let state = controller.state();
//! for device in state.devices() {
//!     let marker = if state.is_active_device(device) { "*" } else { " " };
//!     println!("{marker} {} ({})", device.name(), device.current_effect());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::command::{
    BrightnessCommand, Command, DevicesCommand, EffectCommand, FrequencyCommand, OptionCommand,
    SyncCommand,
};
use crate::error::Error;
use crate::protocol::{ApiResponse, Protocol};
use crate::response::{BrightnessResponse, DevicesResponse, SyncResponse};
use crate::state::{ViewChange, ViewState};
use crate::types::{Brightness, Device, EffectOption, Frequency, FrequencyBound};

#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};

/// Result of a frequency bound change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyOutcome {
    /// The server accepted the new bound.
    Sent,
    /// The request would have crossed the opposite bound, so the opposite
    /// bound was moved locally and nothing was sent.
    Clamped,
}

/// Binds a [`ViewState`] to a visualizer server.
///
/// Cloning a controller shares its transport and state.
#[derive(Debug)]
pub struct Controller<P: Protocol> {
    protocol: Arc<P>,
    state: Arc<RwLock<ViewState>>,
}

impl<P: Protocol> Clone for Controller<P> {
    fn clone(&self) -> Self {
        Self {
            protocol: Arc::clone(&self.protocol),
            state: Arc::clone(&self.state),
        }
    }
}

#[cfg(feature = "http")]
impl Controller<HttpClient> {
    /// Creates a controller talking HTTP to `host` with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(host: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(HttpClient::new(host)?))
    }

    /// Creates a controller from a full HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: HttpConfig) -> Result<Self, Error> {
        Ok(Self::new(config.into_client()?))
    }
}

impl<P: Protocol> Controller<P> {
    /// Creates a controller with an empty view state.
    #[must_use]
    pub fn new(protocol: P) -> Self {
        Self {
            protocol: Arc::new(protocol),
            state: Arc::new(RwLock::new(ViewState::new())),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns a snapshot of the view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.read().clone()
    }

    /// Runs `f` against the current view state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.state.read())
    }

    fn apply(&self, change: &ViewChange) -> bool {
        self.state.write().apply(change)
    }

    async fn send<C: Command + Sync>(&self, command: &C) -> Result<ApiResponse, Error> {
        self.protocol
            .send_command(command)
            .await
            .map_err(Error::Protocol)
    }

    /// Sends a setter and checks its acknowledgement.
    async fn send_setter<C: Command + Sync>(&self, command: &C, strict: bool) -> Result<(), Error> {
        let response = self.send(command).await?;
        let ack = response.acknowledgement()?;
        ack.into_result(strict).inspect_err(|e| {
            tracing::warn!(path = %command.path(), error = %e, "Server rejected request");
        })
    }

    fn active_device_name(&self) -> Result<String, Error> {
        self.with_state(|s| s.active_device().map(|d| d.name().to_string()))
            .ok_or(Error::NoActiveDevice)
    }

    // ========== Devices ==========

    /// Fetches the device list.
    ///
    /// The synthetic `"All"` entry is appended to a non-empty list, the first
    /// device becomes active, and its first reactive effect becomes the active
    /// option. Returns the number of displayed entries.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body has no `devices` field.
    pub async fn refresh_devices(&self) -> Result<usize, Error> {
        let response = self.send(&DevicesCommand::Get).await?;
        let devices = response.parse::<DevicesResponse>()?.into_devices()?;

        tracing::debug!(count = devices.len(), "Fetched devices");

        let mut state = self.state.write();
        state.apply(&ViewChange::Devices(devices));
        Ok(state.devices().len())
    }

    /// Makes the device named `name` active. Local only.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no listed device has this name.
    pub fn select_device(&self, name: &str) -> Result<(), Error> {
        self.state.write().select_device(name)
    }

    /// Returns `true` if `device` is the active device.
    #[must_use]
    pub fn is_active_device(&self, device: &Device) -> bool {
        self.with_state(|s| s.is_active_device(device))
    }

    // ========== Sync ==========

    /// Flips the sync flag and sends the new value.
    ///
    /// The flag flips locally before the request; if the request fails the
    /// previous value is restored. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn toggle_sync(&self) -> Result<bool, Error> {
        let synced = {
            let mut state = self.state.write();
            let synced = !state.is_synced();
            state.apply(&ViewChange::Synced(synced));
            synced
        };

        match self.send_setter(&SyncCommand::Set(synced), false).await {
            Ok(()) => Ok(synced),
            Err(e) => {
                self.apply(&ViewChange::Synced(!synced));
                Err(e)
            }
        }
    }

    /// Fetches the sync flag.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body has no `sync` field.
    pub async fn refresh_sync(&self) -> Result<bool, Error> {
        let response = self.send(&SyncCommand::Get).await?;
        let synced = response.parse::<SyncResponse>()?.sync()?;
        self.apply(&ViewChange::Synced(synced));
        Ok(synced)
    }

    // ========== Effects ==========

    /// Runs `effect` on the active device.
    ///
    /// The active device's current effect only changes when the server
    /// answers with status `"ok"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveDevice` without sending if nothing is
    /// selected, `Error::Rejected` for any other status, or the transport
    /// error.
    pub async fn set_effect(&self, effect: &str) -> Result<(), Error> {
        let device = self.active_device_name()?;
        self.send_setter(&EffectCommand::new(&device, effect), true)
            .await?;
        self.apply(&ViewChange::current_effect(device, effect));
        Ok(())
    }

    /// Makes the effect named `name` the active option. Local only.
    ///
    /// # Errors
    ///
    /// Returns error if no device is active or it has no such effect.
    pub fn select_effect_option(&self, name: &str) -> Result<(), Error> {
        self.state.write().select_effect_option(name)
    }

    /// Returns `true` if `option` is the active effect option.
    #[must_use]
    pub fn is_active_option(&self, option: &EffectOption) -> bool {
        self.with_state(|s| s.is_active_option(option))
    }

    /// Sets option `key` of the active effect option on the active device.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveDevice` / `Error::NoActiveEffect` without
    /// sending if nothing is selected, or the request error.
    pub async fn set_option(&self, key: &str, value: impl Into<Value>) -> Result<(), Error> {
        let (device, effect) = self.with_state(|s| {
            let device = s.active_device().ok_or(Error::NoActiveDevice)?;
            let effect = s.active_effect_option().ok_or(Error::NoActiveEffect)?;
            Ok::<_, Error>((device.name().to_string(), effect.name().to_string()))
        })?;
        let value = value.into();

        tracing::debug!(device = %device, effect = %effect, option = %key, value = %value, "Setting effect option");

        let command = OptionCommand::new(&device, &effect, key, value);
        self.send_setter(&command, false).await?;
        self.apply(&ViewChange::option_value(
            device,
            effect,
            key,
            command.value().clone(),
        ));
        Ok(())
    }

    // ========== Brightness ==========

    /// Sets the global brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn set_brightness(&self, brightness: Brightness) -> Result<(), Error> {
        self.send_setter(&BrightnessCommand::Set(brightness), false)
            .await?;
        self.apply(&ViewChange::Brightness(brightness));
        Ok(())
    }

    /// Fetches the global brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body has no valid
    /// `brightness` field.
    pub async fn refresh_brightness(&self) -> Result<Brightness, Error> {
        let response = self.send(&BrightnessCommand::Get).await?;
        let brightness = response.parse::<BrightnessResponse>()?.brightness()?;
        self.apply(&ViewChange::Brightness(brightness));
        Ok(brightness)
    }

    // ========== Frequency ==========

    /// Sets the upper frequency of the active device.
    ///
    /// A value at or below the current minimum moves the local minimum
    /// instead and sends nothing.
    ///
    /// # Errors
    ///
    /// Returns error if no device is active or the request fails.
    pub async fn set_max_frequency(&self, value: Frequency) -> Result<FrequencyOutcome, Error> {
        self.set_frequency(FrequencyBound::Max, value).await
    }

    /// Sets the lower frequency of the active device.
    ///
    /// A value at or above the current maximum moves the local maximum
    /// instead and sends nothing.
    ///
    /// # Errors
    ///
    /// Returns error if no device is active or the request fails.
    pub async fn set_min_frequency(&self, value: Frequency) -> Result<FrequencyOutcome, Error> {
        self.set_frequency(FrequencyBound::Min, value).await
    }

    async fn set_frequency(
        &self,
        bound: FrequencyBound,
        value: Frequency,
    ) -> Result<FrequencyOutcome, Error> {
        let device = {
            let mut state = self.state.write();
            if state.clamp_frequency(bound, value)? {
                tracing::debug!(%bound, hz = value.hz(), "Frequency clamped locally");
                return Ok(FrequencyOutcome::Clamped);
            }
            state
                .active_device()
                .map(|d| d.name().to_string())
                .ok_or(Error::NoActiveDevice)?
        };

        self.send_setter(&FrequencyCommand::new(bound, &device, value), false)
            .await?;
        self.apply(&ViewChange::frequency(device, bound, value.hz()));
        Ok(FrequencyOutcome::Sent)
    }
}
