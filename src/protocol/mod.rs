// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for talking to the visualizer API.
//!
//! - [`HttpClient`]: `GET /api/<path>?<params>` over HTTP(S)
//! - [`RetryPolicy`]: backoff settings for re-issuing setters
//!
//! The [`Protocol`] trait is the seam the [`Controller`](crate::Controller)
//! talks through, so other transports (or test doubles) can stand in for
//! HTTP.

#[cfg(feature = "http")]
mod http;
mod retry;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpClientBuilder, HttpConfig};
pub use retry::RetryPolicy;

use serde_json::Value;

use crate::command::Command;
use crate::error::{ParseError, ProtocolError};
use crate::response::StatusResponse;

/// A non-empty response body from the visualizer API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    body: String,
}

impl ApiResponse {
    /// Wraps a response body, rejecting bodies that carry nothing.
    ///
    /// Blank bodies and the JSON values `null`, `false`, `0` and `""` count
    /// as empty.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::EmptyResponse` for an empty body.
    pub fn from_body(body: impl Into<String>) -> Result<Self, ProtocolError> {
        let body = body.into();
        if is_empty_body(&body) {
            return Err(ProtocolError::EmptyResponse);
        }
        Ok(Self { body })
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Parses a setter acknowledgement.
    ///
    /// Besides the `{"status": ...}` object, the server may answer a bare
    /// `true` or a bare string holding the rejection reason. A bare `true`
    /// carries no status, so only lenient setters accept it.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is neither of those shapes.
    pub fn acknowledgement(&self) -> Result<StatusResponse, ParseError> {
        match serde_json::from_str::<Value>(&self.body)? {
            Value::Bool(true) => Ok(StatusResponse::default()),
            Value::String(reason) => Ok(StatusResponse::error(reason)),
            value @ Value::Object(_) => serde_json::from_value(value).map_err(Into::into),
            other => Err(ParseError::UnexpectedFormat(other.to_string())),
        }
    }
}

fn is_empty_body(body: &str) -> bool {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return true;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Null | Value::Bool(false)) => true,
        Ok(Value::String(s)) => s.is_empty(),
        Ok(Value::Number(n)) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Trait for transports that can deliver commands to the visualizer API.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a command and returns the non-empty response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails, the server answers with
    /// an error status, or the body is empty.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<ApiResponse, ProtocolError>;
}
