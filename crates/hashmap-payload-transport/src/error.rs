//! Error types for the transport layer.

use thiserror::Error;

/// Errors that can occur while exchanging JSON with a hashmap server.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not valid JSON.
    #[error("invalid response body from {url}: {message}")]
    Decode { url: String, message: String },

    /// The HTTP client could not be built from its configuration.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl TransportError {
    /// The URL of the failed request, if a request was made.
    pub fn url(&self) -> Option<&str> {
        match self {
            TransportError::Request { url, .. }
            | TransportError::Status { url, .. }
            | TransportError::Decode { url, .. } => Some(url),
            TransportError::Build(_) => None,
        }
    }
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;
