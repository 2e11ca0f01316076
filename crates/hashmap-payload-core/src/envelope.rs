//! Envelope: the signed unit that is stored and transported.
//!
//! An envelope is immutable once sealed. All three fields are base64 text so
//! the envelope can travel as plain JSON:
//!
//! ```text
//! {"data":"<b64 record>","pubkey":"<b64 32B>","sig":"<b64 64B>"}
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::{encode_base64, encode_record};
use crate::crypto::Keypair;
use crate::error::CoreError;
use crate::record::DataRecord;
use crate::validation::{validate_envelope, ValidatedEnvelope};

/// The wire envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Base64 of the canonical record bytes.
    pub data: String,

    /// Base64 of the author's 32-byte public key.
    pub pubkey: String,

    /// Base64 of the 64-byte signature over the canonical record bytes.
    pub sig: String,
}

impl Envelope {
    /// Encode, sign, and assemble an envelope, then validate it.
    ///
    /// A freshly sealed envelope always validates; a failure here is a
    /// `ContractViolation` and no envelope is returned.
    pub fn seal(keypair: &Keypair, record: &DataRecord) -> Result<Self, CoreError> {
        Self::seal_validated(keypair, record).map(|validated| validated.envelope)
    }

    /// Like [`Envelope::seal`], keeping the decoded parts from validation.
    pub fn seal_validated(
        keypair: &Keypair,
        record: &DataRecord,
    ) -> Result<ValidatedEnvelope, CoreError> {
        let data_bytes = encode_record(record)?;
        let signature = keypair.sign(&data_bytes);

        let envelope = Self {
            data: encode_base64(&data_bytes),
            pubkey: keypair.public_key().to_base64(),
            sig: signature.to_base64(),
        };

        validate_envelope(&envelope).map_err(|e| CoreError::ContractViolation(e.to_string()))
    }

    /// Parse an envelope from JSON text. All three fields are required.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::MalformedEnvelope(e.to_string()))
    }

    /// Convert from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| CoreError::MalformedEnvelope(e.to_string()))
    }

    /// Serialize to compact JSON text.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Encoding(e.to_string()))
    }

    /// Serialize to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self).map_err(|e| CoreError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sealed() -> Envelope {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let record = DataRecord::with_timestamp(b"hello", 1_000, None).unwrap();
        Envelope::seal(&keypair, &record).unwrap()
    }

    #[test]
    fn test_seal_sets_pubkey() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        assert_eq!(sealed().pubkey, keypair.public_key().to_base64());
    }

    #[test]
    fn test_seal_is_deterministic() {
        assert_eq!(sealed(), sealed());
    }

    #[test]
    fn test_json_field_order() {
        let json = sealed().to_json().unwrap();
        let data_at = json.find("\"data\"").unwrap();
        let pubkey_at = json.find("\"pubkey\"").unwrap();
        let sig_at = json.find("\"sig\"").unwrap();
        assert!(data_at < pubkey_at && pubkey_at < sig_at);
    }

    #[test]
    fn test_from_json() {
        let envelope = sealed();
        let parsed = Envelope::from_json(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(parsed, envelope);
    }

    #[test]
    fn test_from_json_missing_fields() {
        assert!(matches!(
            Envelope::from_json(r#"{"total":"fail"}"#),
            Err(CoreError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            Envelope::from_json(r#"{"data":"","pubkey":""}"#),
            Err(CoreError::MalformedEnvelope(_))
        ));
        assert!(matches!(Envelope::from_json("{"), Err(CoreError::MalformedEnvelope(_))));
    }
}
