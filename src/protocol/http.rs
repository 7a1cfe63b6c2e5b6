// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the visualizer API.

use std::time::Duration;

use reqwest::Client;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Protocol, RetryPolicy};

// ============================================================================
// HttpConfig - Connection settings for a visualizer server
// ============================================================================

/// Configuration for reaching a visualizer server over HTTP.
///
/// # Examples
///
/// ```
/// use reactled_lib::protocol::{HttpConfig, RetryPolicy};
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("visualizer.local");
/// assert_eq!(config.base_url(), "http://visualizer.local:8082");
///
/// // With all options
/// let config = HttpConfig::new("visualizer.local")
///     .with_port(443)
///     .with_https()
///     .with_api_prefix("/led/api")
///     .with_timeout(Duration::from_secs(5))
///     .with_retry_policy(RetryPolicy::disabled());
/// assert_eq!(config.base_url(), "https://visualizer.local");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    api_prefix: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl HttpConfig {
    /// Port the visualizer's API server listens on by default.
    pub const DEFAULT_PORT: u16 = 8082;
    /// Path prefix in front of every endpoint.
    pub const DEFAULT_API_PREFIX: &'static str = "/api";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            api_prefix: Self::DEFAULT_API_PREFIX.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        self
    }

    /// Sets the path prefix in front of every endpoint.
    ///
    /// Leading and trailing slashes are normalised; an empty prefix places
    /// endpoints at the server root.
    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.api_prefix = normalize_prefix(prefix.as_ref());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry policy used for setter commands.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the API path prefix.
    #[must_use]
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is empty".to_string()));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            api_prefix: self.api_prefix,
            client,
            retry: self.retry,
        })
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Adds a scheme and the default port when the host leaves them out.
fn normalize_base_url(host: &str) -> String {
    let (scheme, rest) = host.trim().split_once("://").unwrap_or(("http", host.trim()));
    let rest = rest.trim_end_matches('/');
    let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));

    if has_port(authority) {
        format!("{scheme}://{authority}{path}")
    } else {
        format!("{scheme}://{authority}:{}{path}", HttpConfig::DEFAULT_PORT)
    }
}

fn has_port(authority: &str) -> bool {
    authority
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
}

fn request_error(e: reqwest::Error) -> ProtocolError {
    if e.is_connect() {
        ProtocolError::ConnectionFailed(e.to_string())
    } else {
        ProtocolError::Http(e)
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the visualizer API.
///
/// Every command becomes `GET <base_url><api_prefix>/<path>?<params>`.
///
/// # Examples
///
/// ```no_run
/// use reactled_lib::command::DevicesCommand;
/// use reactled_lib::protocol::{HttpClient, Protocol};
/// use reactled_lib::response::DevicesResponse;
///
/// # async fn example() -> reactled_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.20:8082")?;
/// let response = client.send_command(&DevicesCommand::Get).await?;
/// let devices = response.parse::<DevicesResponse>()?.into_devices()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    api_prefix: String,
    client: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a client for `host`, which may carry a scheme and port.
    ///
    /// Without a port the client targets [`HttpConfig::DEFAULT_PORT`]. Uses
    /// the default API prefix, timeout and retry policy.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpClientBuilder::new().host(host).build()
    }

    /// Returns the base URL of the server.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the retry policy applied to setter commands.
    #[must_use]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Builds the URL for a command.
    fn build_url<C: Command>(&self, command: &C) -> String {
        let path = command.path();
        let query = command.query_string();
        if query.is_empty() {
            format!("{}{}/{path}", self.base_url, self.api_prefix)
        } else {
            format!("{}{}/{path}?{query}", self.base_url, self.api_prefix)
        }
    }

    async fn send_once(&self, url: &str) -> Result<ApiResponse, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Err(ProtocolError::HttpStatus {
                code: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        ApiResponse::from_body(body)
    }
}

impl Protocol for HttpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<ApiResponse, ProtocolError> {
        let url = self.build_url(command);
        let mut attempt = 0;

        loop {
            match self.send_once(&url).await {
                Err(e)
                    if command.is_retryable()
                        && e.is_transient()
                        && self.retry.should_retry(attempt) =>
                {
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        url = %url,
                        error = %e,
                        attempt = attempt + 1,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    host: Option<String>,
    api_prefix: Option<String>,
    timeout: Option<Duration>,
    retry: Option<RetryPolicy>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host address, optionally with scheme and port.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the API path prefix.
    #[must_use]
    pub fn api_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.api_prefix = Some(normalize_prefix(prefix.as_ref()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry policy for setter commands.
    #[must_use]
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if host is not set or client creation fails.
    pub fn build(self) -> Result<HttpClient, ProtocolError> {
        let host = self
            .host
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| ProtocolError::InvalidAddress("host is required".to_string()))?;

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(HttpConfig::DEFAULT_TIMEOUT))
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: normalize_base_url(&host),
            api_prefix: self
                .api_prefix
                .unwrap_or_else(|| HttpConfig::DEFAULT_API_PREFIX.to_string()),
            client,
            retry: self.retry.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{DevicesCommand, SyncCommand};

    #[test]
    fn build_url_without_params() {
        let client = HttpClient::new("192.168.1.20:8082").unwrap();
        let url = client.build_url(&DevicesCommand::Get);
        assert_eq!(url, "http://192.168.1.20:8082/api/get/devices");
    }

    #[test]
    fn build_url_with_params() {
        let client = HttpClient::new("192.168.1.20:8082").unwrap();
        let url = client.build_url(&SyncCommand::Set(true));
        assert_eq!(url, "http://192.168.1.20:8082/api/set/sync?sync=true");
    }

    #[test]
    fn build_url_with_custom_prefix() {
        let client = HttpClientBuilder::new()
            .host("https://lights.example/")
            .api_prefix("v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://lights.example:8082");
        assert_eq!(
            client.build_url(&DevicesCommand::Get),
            "https://lights.example:8082/v1/get/devices"
        );
    }

    #[test]
    fn build_url_with_empty_prefix() {
        let client = HttpClientBuilder::new()
            .host("lights")
            .api_prefix("/")
            .build()
            .unwrap();
        assert_eq!(
            client.build_url(&DevicesCommand::Get),
            "http://lights:8082/get/devices"
        );
    }

    #[test]
    fn bare_host_gets_default_port() {
        for host in ["visualizer.local", "192.168.1.20", "lights/"] {
            let from_new = HttpClient::new(host).unwrap();
            let from_config = HttpConfig::new(host.trim_end_matches('/'))
                .into_client()
                .unwrap();
            assert_eq!(from_new.base_url(), from_config.base_url(), "host {host}");
        }
        assert_eq!(
            HttpClient::new("visualizer.local").unwrap().base_url(),
            "http://visualizer.local:8082"
        );
    }

    #[test]
    fn explicit_port_is_kept() {
        assert_eq!(
            HttpClient::new("http://127.0.0.1:9000/").unwrap().base_url(),
            "http://127.0.0.1:9000"
        );
        assert_eq!(
            HttpClient::new("[::1]:8080").unwrap().base_url(),
            "http://[::1]:8080"
        );
        assert_eq!(
            HttpClient::new("[::1]").unwrap().base_url(),
            "http://[::1]:8082"
        );
        assert_eq!(
            HttpClient::new("lights.example/proxy").unwrap().base_url(),
            "http://lights.example:8082/proxy"
        );
    }

    #[test]
    fn builder_missing_host() {
        assert!(HttpClientBuilder::new().build().is_err());
        assert!(HttpClientBuilder::new().host("  ").build().is_err());
    }

    #[test]
    fn builder_with_all_options() {
        let client = HttpClientBuilder::new()
            .host("192.168.1.20")
            .timeout(Duration::from_secs(5))
            .retry_policy(RetryPolicy::disabled())
            .build()
            .unwrap();

        assert_eq!(client.retry_policy(), &RetryPolicy::disabled());
    }

    // =========================================================================
    // HttpConfig tests
    // =========================================================================

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.20");
        assert_eq!(config.host(), "192.168.1.20");
        assert_eq!(config.port(), 8082);
        assert!(!config.use_https());
        assert_eq!(config.api_prefix(), "/api");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.retry_policy(), &RetryPolicy::default());
    }

    #[test]
    fn http_config_base_url_default_ports() {
        assert_eq!(
            HttpConfig::new("lights").with_port(80).base_url(),
            "http://lights"
        );
        assert_eq!(
            HttpConfig::new("lights").with_https().with_port(443).base_url(),
            "https://lights"
        );
        assert_eq!(
            HttpConfig::new("lights").with_https().base_url(),
            "https://lights:8082"
        );
    }

    #[test]
    fn http_config_prefix_normalised() {
        assert_eq!(HttpConfig::new("h").with_api_prefix("api/").api_prefix(), "/api");
        assert_eq!(HttpConfig::new("h").with_api_prefix("").api_prefix(), "");
    }

    #[test]
    fn http_config_into_client() {
        let client = HttpConfig::new("lights").with_port(9000).into_client().unwrap();
        assert_eq!(client.base_url(), "http://lights:9000");
        assert_eq!(
            client.build_url(&DevicesCommand::Get),
            "http://lights:9000/api/get/devices"
        );
    }

    #[test]
    fn http_config_empty_host() {
        assert!(HttpConfig::new("").into_client().is_err());
    }
}
