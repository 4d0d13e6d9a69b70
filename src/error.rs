//! Error types for the request helper.
//!
//! This module is intentionally small: every failure a call can surface is
//! one of the variants below, and all of them reach the caller through the
//! `Result` returned by [`RestClient::fetch`](crate::client::RestClient::fetch).
//! Malformed caller input (empty parameter names, absent values, unparsable
//! header overrides) is never an error — it is silently skipped so callers
//! get a best-effort URL rather than a validation failure.

use thiserror::Error;

/// Errors returned by the request helper.
#[derive(Debug, Error)]
pub enum RestError {
    /// Transport-level failure: connection, TLS, or I/O trouble before a
    /// status code was available.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The server answered with a non-2xx status. `message` is the
    /// normalized status line produced by the error extractor.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Request body serialization or success-shape JSON decoding failed.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
