// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Touchline controllers.

use std::time::Duration;

use reqwest::Client;

use crate::error::TransportError;
use crate::protocol::{READ_PATH, Transport, WRITE_PATH};

// ============================================================================
// HttpConfig - Connection parameters for one controller
// ============================================================================

/// Configuration for an HTTP connection to a controller.
///
/// The controller is stateless from the client's point of view: every read
/// and every write is an independent request.
///
/// # Examples
///
/// ```
/// use touchline_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("ROTH-10A6D5");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.40")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5))
///     .with_retries(3)
///     .with_retry_delay(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
    retries: u8,
    retry_delay: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default number of extra attempts after a transient failure.
    pub const DEFAULT_RETRIES: u8 = 2;
    /// Default pause between attempts.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(250);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP address of the controller. A value that
    ///   already starts with `http://` or `https://` is used as the base URL
    ///   verbatim.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
            retries: Self::DEFAULT_RETRIES,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how many extra attempts are made after a connect or timeout
    /// failure. `0` disables retries.
    #[must_use]
    pub fn with_retries(mut self, retries: u8) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the pause between attempts.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
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

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry budget.
    #[must_use]
    pub fn retries(&self) -> u8 {
        self.retries
    }

    /// Returns the pause between attempts.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }
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
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, TransportError> {
        if self.host.trim().is_empty() {
            return Err(TransportError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            retries: self.retries,
            retry_delay: self.retry_delay,
        })
    }
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP client for one Touchline controller.
///
/// Connect and timeout failures are retried up to the configured budget;
/// both endpoints are idempotent per item, so repeating a call is safe.
///
/// # Examples
///
/// ```no_run
/// use touchline_lib::protocol::{HttpClient, Transport, encode_request};
///
/// # async fn example() -> touchline_lib::Result<()> {
/// let client = HttpClient::new("ROTH-10A6D5")?;
/// let body = encode_request(&["totalNumberOfDevices"])?;
/// let response = client.read_values(body).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    retries: u8,
    retry_delay: Duration,
}

impl HttpClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, TransportError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the controller.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn read_url(&self) -> String {
        format!("{}{READ_PATH}", self.base_url)
    }

    fn write_url(&self, query: &str) -> String {
        format!("{}{WRITE_PATH}?{query}", self.base_url)
    }

    /// Runs `attempt` until it succeeds, fails permanently, or the retry
    /// budget is spent.
    async fn with_retry<T, F, Fut>(&self, mut attempt: F) -> Result<T, TransportError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, reqwest::Error>>,
    {
        let mut remaining = self.retries;
        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(e) if remaining > 0 && (e.is_connect() || e.is_timeout()) => {
                    remaining -= 1;
                    tracing::debug!(error = %e, remaining, "Transient HTTP failure, retrying");
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(TransportError::Http(e)),
            }
        }
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(TransportError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

impl Transport for HttpClient {
    async fn read_values(&self, body: String) -> Result<String, TransportError> {
        let url = self.read_url();

        tracing::debug!(url = %url, body = %body, "Sending read request");

        let response = self
            .with_retry(|| {
                self.client
                    .post(&url)
                    .header(reqwest::header::CONTENT_TYPE, "text/xml")
                    .body(body.clone())
                    .send()
            })
            .await?;

        check_status(&response)?;

        let text = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(body = %text, "Received read response");

        Ok(text)
    }

    async fn write_value(&self, query: &str) -> Result<(), TransportError> {
        let url = self.write_url(query);

        tracing::debug!(url = %url, "Sending write request");

        let response = self.with_retry(|| self.client.get(&url).send()).await?;

        check_status(&response)
    }
}
