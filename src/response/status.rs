// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setter acknowledgement parsing.

use serde::Deserialize;

use crate::error::Error;

/// Acknowledgement returned by `set/*` endpoints.
///
/// - `{"status": "ok"}` on success
/// - `{"status": "error", "message": "effect not found"}` on rejection
///
/// # Examples
///
/// ```
/// use reactled_lib::response::StatusResponse;
///
/// let ok: StatusResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
/// assert!(ok.is_ok());
///
/// let err: StatusResponse =
///     serde_json::from_str(r#"{"status": "error", "message": "Device not found"}"#).unwrap();
/// assert_eq!(err.rejection().as_deref(), Some("Device not found"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default, alias = "error")]
    message: Option<String>,
}

impl StatusResponse {
    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            status: Some("error".to_string()),
            message: Some(message.into()),
        }
    }

    /// Returns the raw status field.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns `true` only when the status field is exactly `"ok"`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }

    /// Returns the rejection reason when a non-`"ok"` status is present.
    #[must_use]
    pub fn rejection(&self) -> Option<String> {
        match self.status.as_deref() {
            None | Some("ok") => None,
            Some(status) => Some(self.message.clone().unwrap_or_else(|| status.to_string())),
        }
    }

    /// Converts the acknowledgement into a result.
    ///
    /// With `strict` set, a body without any status also counts as a
    /// rejection.
    ///
    /// # Errors
    ///
    /// Returns `Error::Rejected` if the server refused the request.
    pub fn into_result(self, strict: bool) -> Result<(), Error> {
        if let Some(reason) = self.rejection() {
            return Err(Error::Rejected(reason));
        }
        if strict && !self.is_ok() {
            return Err(Error::Rejected("missing status".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> StatusResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn ok_status() {
        assert!(parse(r#"{"status": "ok"}"#).into_result(true).is_ok());
    }

    #[test]
    fn other_status_is_rejected() {
        let result = parse(r#"{"status": "failed"}"#).into_result(false);
        assert!(matches!(result, Err(Error::Rejected(reason)) if reason == "failed"));
    }

    #[test]
    fn error_alias_for_message() {
        let response = parse(r#"{"status": "error", "error": "Invalid value"}"#);
        assert_eq!(response.rejection().as_deref(), Some("Invalid value"));
    }

    #[test]
    fn missing_status_depends_on_strictness() {
        assert!(parse("{}").into_result(false).is_ok());
        assert!(parse("{}").into_result(true).is_err());
    }

    #[test]
    fn status_is_case_sensitive() {
        assert!(!parse(r#"{"status": "OK"}"#).is_ok());
    }
}
