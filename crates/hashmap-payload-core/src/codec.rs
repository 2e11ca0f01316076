//! Canonical record encoding and the text encodings used at every boundary.
//!
//! Records are serialized as compact JSON with a fixed field order:
//!
//! ```text
//! {"message":<b64>,"timestamp":<ns>,"sigMethod":"nacl-sign-ed25519","version":"0.0.1","ttl":<s>}
//! ```
//!
//! The canonical encoding is what gets signed, so it must be byte-identical
//! across every client that talks to a hashmap server. Envelope fields use
//! standard padded base64; endpoints use the bitcoin base58 alphabet.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::CoreError;
use crate::record::DataRecord;

/// Encode a record to its canonical bytes.
pub fn encode_record(record: &DataRecord) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(record).map_err(|e| CoreError::Encoding(e.to_string()))
}

/// Decode canonical bytes back into a record.
pub fn decode_record(bytes: &[u8]) -> Result<DataRecord, CoreError> {
    serde_json::from_slice(bytes).map_err(|e| CoreError::MalformedRecord(e.to_string()))
}

/// Standard padded base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard padded base64.
pub fn decode_base64(s: &str) -> Result<Vec<u8>, CoreError> {
    STANDARD
        .decode(s)
        .map_err(|e| CoreError::Encoding(format!("base64: {e}")))
}

/// Bitcoin-alphabet base58.
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode bitcoin-alphabet base58.
pub fn decode_base58(s: &str) -> Result<Vec<u8>, CoreError> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| CoreError::Encoding(format!("base58: {e}")))
}

/// Current wall-clock time in nanoseconds since the Unix epoch.
///
/// Informative only; not monotonic across calls.
pub fn unix_nano_now() -> i64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    i64::try_from(nanos).unwrap_or(i64::MAX)
}
