//! Error types for the scores backend

use thiserror::Error;

/// Errors raised while talking to the scores service
#[derive(Debug, Error)]
pub enum BackendError {
    /// URL or header could not be built from the configuration
    #[error("Could not prepare request: {0}")]
    CouldNotPrepareRequest(String),

    /// Connection, TLS or body read failure
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with anything other than 200 OK
    #[error("Unexpected response status {status}")]
    InvalidResponse { status: u16 },

    /// Response body is not the expected JSON
    #[error("Could not decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Score could not be serialized for submission
    #[error("Could not encode score: {0}")]
    Encoding(#[source] serde_json::Error),
}
