//! DataRecord: the canonical body that gets signed.
//!
//! A record carries a base64 message plus the metadata servers use to
//! interpret it. Field order is part of the wire format: the signature covers
//! the serialized bytes, so the struct layout below must not be reordered.

use serde::{Deserialize, Serialize};

use crate::codec::{decode_base64, encode_base64, unix_nano_now};
use crate::error::CoreError;

/// Maximum decoded message length in bytes.
pub const MAX_MESSAGE_BYTES: usize = 512;

/// Message used when the caller supplies none.
pub const DEFAULT_MESSAGE: &[u8] = b" ";

/// The only signature scheme understood by hashmap servers.
pub const DEFAULT_SIG_METHOD: &str = "nacl-sign-ed25519";

/// Default record lifetime: one day, in seconds.
pub const DATA_TTL_DEFAULT: u64 = 86_400;

/// Maximum record lifetime: one week, in seconds.
pub const DATA_TTL_MAX: u64 = 604_800;

/// Payload format version.
pub const VERSION: &str = "0.0.1";

/// The inner payload record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRecord {
    /// Base64 encoding of the message bytes.
    pub message: String,

    /// Author-claimed creation time, nanoseconds since the Unix epoch. Untrusted.
    pub timestamp: i64,

    /// Signature scheme tag.
    pub sig_method: String,

    /// Format version.
    pub version: String,

    /// Requested lifetime in seconds.
    pub ttl: u64,
}

impl DataRecord {
    /// Build a record stamped with the current time.
    pub fn new(message: &[u8], ttl: Option<u64>) -> Result<Self, CoreError> {
        Self::with_timestamp(message, unix_nano_now(), ttl)
    }

    /// Build a record with an explicit timestamp.
    ///
    /// Fails with `TtlExceeded` or `MessageTooLarge` before anything is encoded.
    pub fn with_timestamp(message: &[u8], timestamp: i64, ttl: Option<u64>) -> Result<Self, CoreError> {
        let ttl = resolve_ttl(ttl)?;
        check_message_len(message.len())?;

        Ok(Self {
            message: encode_base64(message),
            timestamp,
            sig_method: DEFAULT_SIG_METHOD.to_string(),
            version: VERSION.to_string(),
            ttl,
        })
    }

    /// Decode the embedded base64 message.
    pub fn message_bytes(&self) -> Result<Vec<u8>, CoreError> {
        decode_base64(&self.message)
            .map_err(|e| CoreError::MalformedRecord(format!("message field: {e}")))
    }

    /// Whether the record names the supported signature scheme.
    pub fn has_supported_sig_method(&self) -> bool {
        self.sig_method == DEFAULT_SIG_METHOD
    }
}

/// Resolve a requested ttl against the default and the ceiling.
///
/// `None` and zero both mean "unset".
pub fn resolve_ttl(requested: Option<u64>) -> Result<u64, CoreError> {
    match requested {
        None | Some(0) => Ok(DATA_TTL_DEFAULT),
        Some(ttl) if ttl > DATA_TTL_MAX => Err(CoreError::TtlExceeded {
            ttl,
            max: DATA_TTL_MAX,
        }),
        Some(ttl) => Ok(ttl),
    }
}

/// Enforce the decoded message size limit.
pub fn check_message_len(len: usize) -> Result<(), CoreError> {
    if len > MAX_MESSAGE_BYTES {
        return Err(CoreError::MessageTooLarge {
            len,
            max: MAX_MESSAGE_BYTES,
        });
    }
    Ok(())
}
