//! Error types for the pokedex client.
//!
//! # Design
//! Transport failures are reported with the URL that was being fetched and
//! the HTTP library's message. HTTP statuses are never errors here: a 404 is
//! a response like any other and reaches the handler unchanged.

use thiserror::Error;

/// Errors returned by endpoints, response helpers and logger setup.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP library failed before a response was received (DNS,
    /// connection refused, timeout, TLS).
    #[error("GET {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The logger could not be installed.
    #[error("logger initialization failed: {0}")]
    Logger(String),
}

impl From<log::SetLoggerError> for ApiError {
    fn from(err: log::SetLoggerError) -> Self {
        ApiError::Logger(err.to_string())
    }
}
