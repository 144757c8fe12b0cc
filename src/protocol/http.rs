// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! reqwest-based transport for the Lyric API.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Transport};

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for the HTTP transport.
///
/// The access token is sent as a bearer token on every request. Obtaining
/// and refreshing it is the caller's business; wrap [`HttpClient`] in your
/// own [`Transport`] if tokens expire during a session.
///
/// # Examples
///
/// ```
/// use lyric_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new()
///     .with_access_token("token")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    access_token: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with no token and the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            access_token: None,
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Sets the OAuth access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Returns the access token if set.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the custom user agent if set.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let mut builder = Client::builder().timeout(self.timeout);
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            client,
            access_token: self.access_token,
            timeout: self.timeout,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP transport backed by `reqwest`.
///
/// # Examples
///
/// ```no_run
/// use lyric_lib::Lyric;
/// use lyric_lib::protocol::HttpClient;
///
/// # async fn example() -> lyric_lib::Result<()> {
/// let client = HttpClient::new("access-token")?;
/// let lyric = Lyric::new(client, "my-api-key");
/// lyric.get_locations().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    access_token: Option<String>,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client authenticating with the given access token.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(access_token: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new().with_access_token(access_token).into_client()
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Replaces the access token used for subsequent requests.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Returns whether an access token is configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT, HeaderValue::from_static("application/json"));
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ProtocolError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received HTTP response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(status = status.as_u16(), "Lyric API rejected credentials");
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse::new(status.as_u16(), body))
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> ProtocolError {
        if error.is_timeout() {
            ProtocolError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ProtocolError::Http(error)
        }
    }
}

impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<ApiResponse, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP GET");
        self.execute(self.client.get(url)).await
    }

    async fn post(
        &self,
        url: &str,
        params: &[(&str, &str)],
        data: &Value,
    ) -> Result<ApiResponse, ProtocolError> {
        tracing::debug!(url = %url, body = %data, "Sending HTTP POST");
        self.execute(self.client.post(url).query(params).json(data))
            .await
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    access_token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth access token.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if client creation fails.
    pub fn build(self) -> Result<HttpClient, ProtocolError> {
        let mut config = HttpConfig::new();
        if let Some(token) = self.access_token {
            config = config.with_access_token(token);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        config.into_client()
    }
}
