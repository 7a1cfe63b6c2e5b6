// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ReactLED` Lib - A Rust library to control audio-reactive LED visualizers.
//!
//! The visualizer server exposes a small HTTP API (`GET /api/<path>`) for its
//! devices: global brightness, the running effect, per-effect options, the
//! analysed frequency band, and a sync flag that makes changes apply to every
//! device. This crate wraps that API in typed commands and keeps an explicit
//! [`ViewState`](state::ViewState) a UI can render from.
//!
//! # Supported Features
//!
//! - **Devices**: List devices and their effect catalogues
//! - **Effects**: Switch effects and tune effect options
//! - **Brightness**: Read and set the global output factor
//! - **Frequency**: Move the band edges, clamped client-side so min < max
//! - **Sync**: Read and toggle the global sync flag
//!
//! # Quick Start
//!
//! ```no_run
//! use reactled_lib::Controller;
//! use reactled_lib::types::Brightness;
//!
//! #[tokio::main]
//! async fn main() -> reactled_lib::Result<()> {
//!     let controller = Controller::http("192.168.1.20")?;
//!
//!     // Loads devices, selects the first one and its first reactive effect
//!     controller.refresh_devices().await?;
//!
//!     controller.set_brightness(Brightness::new(0.8)?).await?;
//!     controller.set_effect("Energy").await?;
//!     controller.set_option("blur", 2.0).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use reactled_lib::Controller;
//! use reactled_lib::protocol::{HttpConfig, RetryPolicy};
//!
//! # fn example() -> reactled_lib::Result<()> {
//! let config = HttpConfig::new("visualizer.local")
//!     .with_port(8080)
//!     .with_timeout(Duration::from_secs(3))
//!     .with_retry_policy(RetryPolicy::new().with_max_retries(5));
//!
//! let controller = Controller::from_config(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Low-level Commands
//!
//! ```no_run
//! use reactled_lib::command::SyncCommand;
//! use reactled_lib::protocol::{HttpClient, Protocol};
//! use reactled_lib::response::SyncResponse;
//!
//! # async fn example() -> reactled_lib::Result<()> {
//! let client = HttpClient::new("192.168.1.20:8082")?;
//! let synced = client
//!     .send_command(&SyncCommand::Get)
//!     .await?
//!     .parse::<SyncResponse>()?
//!     .sync()?;
//! # Ok(())
//! # }
//! ```

pub mod command;
mod controller;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use command::{
    BrightnessCommand, Command, DevicesCommand, EffectCommand, FrequencyCommand, OptionCommand,
    SyncCommand,
};
pub use controller::{Controller, FrequencyOutcome};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpClientBuilder, HttpConfig};
pub use protocol::{ApiResponse, Protocol, RetryPolicy};
pub use response::{BrightnessResponse, DevicesResponse, StatusResponse, SyncResponse};
pub use state::{ViewChange, ViewState};
pub use types::{Brightness, Device, EffectOption, Frequency, FrequencyBound};
