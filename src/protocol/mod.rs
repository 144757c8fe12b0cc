// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer used by the [`Lyric`](crate::Lyric) facade.
//!
//! The facade never performs HTTP itself. It builds URLs and payloads and
//! hands them to a [`Transport`], which is responsible for authentication,
//! timeouts and the actual network round trip.
//!
//! # Transports
//!
//! - [`HttpClient`]: reqwest-based transport (enabled by the `http` feature)
//! - Any caller type implementing [`Transport`], e.g. a client that
//!   refreshes OAuth tokens before each request

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpClientBuilder, HttpConfig};

use serde_json::Value;

use crate::error::{ParseError, ProtocolError};

/// Response returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a new response with the given status code and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as a JSON value.
    ///
    /// An empty body yields [`Value::Null`], the same as a literal `null`.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, ParseError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// An asynchronous HTTP transport for the Lyric API.
///
/// Implementors own everything below the request level: authentication
/// headers, token refresh, timeouts and status handling. Errors are passed
/// through the facade untouched.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs a GET request on a fully built URL (query string included).
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn get(&self, url: &str) -> Result<ApiResponse, ProtocolError>;

    /// Performs a POST request with query parameters and a JSON body.
    ///
    /// # Arguments
    ///
    /// * `url` - The endpoint URL without query string
    /// * `params` - Query parameters appended to the URL
    /// * `data` - The request body
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn post(
        &self,
        url: &str,
        params: &[(&str, &str)],
        data: &Value,
    ) -> Result<ApiResponse, ProtocolError>;
}
