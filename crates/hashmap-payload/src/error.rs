//! Error types for the payload client.

use hashmap_payload_core::{CoreError, ValidationError};
use hashmap_payload_transport::TransportError;
use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Encoding, key, or construction error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Transport error, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// No server URI was given and none is configured.
    #[error("missing uri")]
    MissingUri,

    /// No endpoint was given and none is configured.
    #[error("missing endpoint")]
    MissingEndpoint,

    /// No envelope has been generated, imported, or fetched yet.
    #[error("missing payload")]
    MissingPayload,
}

impl ClientError {
    /// Whether repeating the call could succeed.
    ///
    /// Only transport failures qualify; every validation failure is terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_is_retryable() {
        let transport = ClientError::from(TransportError::Status {
            url: "https://example.test".into(),
            status: 503,
        });
        assert!(transport.is_retryable());

        assert!(!ClientError::from(ValidationError::SignatureInvalid).is_retryable());
        assert!(!ClientError::MissingPayload.is_retryable());
        assert!(!ClientError::from(CoreError::TtlExceeded { ttl: 1, max: 0 }).is_retryable());
    }
}
