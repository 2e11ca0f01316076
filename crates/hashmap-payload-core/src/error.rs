//! Error types for hashmap payload primitives.

use thiserror::Error;

/// Core errors raised while encoding, decoding, or constructing payloads.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("malformed endpoint: {0}")]
    MalformedEndpoint(String),

    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("ttl {ttl} exceeds maximum of {max} seconds")]
    TtlExceeded { ttl: u64, max: u64 },

    #[error("message length {len} exceeds maximum of {max} bytes")]
    MessageTooLarge { len: usize, max: usize },

    /// A freshly sealed envelope failed its own validation.
    #[error("sealed envelope failed validation: {0}")]
    ContractViolation(String),
}

/// Errors from the envelope validation chain.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("unsupported signature method: {0}")]
    UnsupportedSigMethod(String),

    #[error("message length {len} exceeds maximum of {max} bytes")]
    MessageTooLarge { len: usize, max: usize },

    #[error("signature verification failed")]
    SignatureInvalid,

    #[error("endpoint mismatch: expected {expected}, got {actual}")]
    EndpointMismatch { expected: String, actual: String },
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Encoding(msg) => ValidationError::Encoding(msg),
            CoreError::MessageTooLarge { len, max } => ValidationError::MessageTooLarge { len, max },
            CoreError::InvalidKeyEncoding(_) => ValidationError::SignatureInvalid,
            CoreError::MalformedRecord(msg)
            | CoreError::MalformedEnvelope(msg)
            | CoreError::MalformedEndpoint(msg)
            | CoreError::ContractViolation(msg) => ValidationError::MalformedRecord(msg),
            CoreError::TtlExceeded { ttl, max } => {
                ValidationError::MalformedRecord(format!("ttl {ttl} exceeds maximum of {max}"))
            }
        }
    }
}
