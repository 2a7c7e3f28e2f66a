//! Error types for the TikWM client.

use thiserror::Error;

/// Result type for TikWM client operations.
pub type Result<T> = std::result::Result<T, TikwmError>;

/// TikWM client errors.
#[derive(Debug, Error)]
pub enum TikwmError {
    /// Configuration error (unparseable base URL, client construction)
    #[error("configuration error: {0}")]
    Config(String),

    /// The request did not complete within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Transport failure (DNS, connection refused, reset)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response from the API
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON envelope
    #[error("parse error: {0}")]
    Parse(String),
}
