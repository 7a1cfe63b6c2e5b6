// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ReactLED` library.
//!
//! Failures are split by origin: value validation, transport, response
//! parsing, server-side rejection, and controller preconditions (an action
//! that needs a selected device when none is selected).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The server answered but refused the request.
    #[error("request rejected by server: {0}")]
    Rejected(String),

    /// The action needs an active device and none is selected.
    #[error("no active device selected")]
    NoActiveDevice,

    /// The action needs an active effect option and none is selected.
    #[error("no active effect option selected")]
    NoActiveEffect,

    /// No device with this name is in the last fetched list.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// The active device has no effect with this name.
    #[error("effect not found: {0}")]
    EffectNotFound(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A brightness outside `[0.0, 1.0]`, or not a number.
    #[error("brightness {0} is out of range [0, 1]")]
    InvalidBrightness(f32),

    /// A frequency outside the supported window.
    #[error("frequency {actual} Hz is out of range [{min}, {max}]")]
    InvalidFrequency {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },
}

/// Errors related to talking to the visualizer API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a response was received.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {code} - {reason}")]
    HttpStatus {
        /// Numeric status code.
        code: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// The response carried no usable body.
    #[error("empty response body")]
    EmptyResponse,

    /// Connection to the server failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl ProtocolError {
    /// Returns `true` if re-issuing the same request might succeed.
    ///
    /// Transport failures and 5xx answers are transient; client errors and
    /// empty bodies are not.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            Self::Http(e) => e.is_timeout() || e.is_request(),
            Self::HttpStatus { code, .. } => *code >= 500,
            Self::ConnectionFailed(_) => true,
            Self::EmptyResponse | Self::InvalidAddress(_) => false,
        }
    }
}

/// Errors related to parsing API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidFrequency {
            min: 0,
            max: 20000,
            actual: 25000,
        };
        assert_eq!(err.to_string(), "frequency 25000 Hz is out of range [0, 20000]");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidBrightness(1.5).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidBrightness(_))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("devices".to_string());
        assert_eq!(err.to_string(), "missing field in response: devices");
    }

    #[test]
    fn status_errors_transient_only_for_server_side() {
        let server = ProtocolError::HttpStatus {
            code: 503,
            reason: "Service Unavailable".to_string(),
        };
        let client = ProtocolError::HttpStatus {
            code: 400,
            reason: "Bad Request".to_string(),
        };
        assert!(server.is_transient());
        assert!(!client.is_transient());
        assert!(!ProtocolError::EmptyResponse.is_transient());
    }

    #[test]
    fn connection_failures_are_transient() {
        assert!(ProtocolError::ConnectionFailed("refused".to_string()).is_transient());
        assert!(!ProtocolError::InvalidAddress(String::new()).is_transient());
    }

    #[test]
    fn rejected_display() {
        let err = Error::Rejected("effect not found".to_string());
        assert_eq!(err.to_string(), "request rejected by server: effect not found");
    }
}
