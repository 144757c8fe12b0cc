// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Lyric library.
//!
//! Failures are grouped by where they originate: the transport (network,
//! authentication, HTTP status), the JSON layer (malformed bodies, missing
//! fields), and value construction. Nothing in the library recovers from
//! them; every error reaches the caller of the facade operation.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error raised by the transport.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response or reading a field.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A time of day could not be parsed as `HH:MM:SS` or `HH:MM`.
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
}

/// Errors related to HTTP communication with the Lyric API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The API rejected the access token.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The API answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing Lyric responses.
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
        let err = ValueError::InvalidTime("25:00".to_string());
        assert_eq!(err.to_string(), "invalid time of day: 25:00");
    }

    #[test]
    fn error_from_parse_error() {
        let parse_err = ParseError::MissingField("deviceID".to_string());
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(ParseError::MissingField(ref f)) if f == "deviceID"));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("changeableValues".to_string());
        assert_eq!(err.to_string(), "missing field in response: changeableValues");
    }

    #[test]
    fn status_error_display() {
        let err = ProtocolError::Status {
            status: 400,
            body: "bad request".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 400: bad request");
    }
}
