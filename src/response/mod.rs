// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for visualizer API JSON bodies.
//!
//! The API has no common envelope for getters: each one answers with an
//! object holding a single well-known field. Setters answer with a
//! [`StatusResponse`].

mod brightness;
mod devices;
mod status;
mod sync;

pub use brightness::BrightnessResponse;
pub use devices::DevicesResponse;
pub use status::StatusResponse;
pub use sync::SyncResponse;
