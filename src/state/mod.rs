// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View state management types.
//!
//! [`ViewState`] holds what a control UI renders; [`ViewChange`] is a single
//! update derived from a server response.
//!
//! # Examples
//!
//! ```
//! use reactled_lib::state::{ViewChange, ViewState};
//! use reactled_lib::types::Brightness;
//!
//! let mut state = ViewState::new();
//! state.apply(&ViewChange::Brightness(Brightness::new(0.4).unwrap()));
//!
//! assert_eq!(state.brightness().as_percent(), 40);
//! ```

mod view_change;
mod view_state;

pub use view_change::ViewChange;
pub use view_state::ViewState;
