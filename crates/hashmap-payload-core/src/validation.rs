//! Envelope validation: structural, content, and signature checks.

use crate::codec::{decode_base64, decode_record};
use crate::crypto::Ed25519PublicKey;
use crate::endpoint::Endpoint;
use crate::envelope::Envelope;
use crate::error::ValidationError;
use crate::record::{DataRecord, MAX_MESSAGE_BYTES};
use crate::signer::verify;

/// An envelope that passed the full validation chain, with its decoded parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEnvelope {
    pub envelope: Envelope,
    pub record: DataRecord,
    pub message: Vec<u8>,
    pub public_key: Ed25519PublicKey,
}

impl ValidatedEnvelope {
    /// The endpoint this envelope is addressed under.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from_public_key(&self.public_key)
    }
}

/// Validate an envelope.
///
/// Stages run in order and the first failure aborts the rest:
/// 1. Base64 decoding of `data`, `sig`, `pubkey`
/// 2. Record decoding, message decoding, signature scheme tag
/// 3. Message size
/// 4. Signature over the raw data bytes
pub fn validate_envelope(envelope: &Envelope) -> Result<ValidatedEnvelope, ValidationError> {
    // 1. Field encodings
    let data_bytes = decode_base64(&envelope.data)?;
    let sig_bytes = decode_base64(&envelope.sig)?;
    let pubkey_bytes = decode_base64(&envelope.pubkey)?;

    // 2. Record structure
    let record = decode_record(&data_bytes)?;
    let message = record.message_bytes()?;
    if !record.has_supported_sig_method() {
        return Err(ValidationError::UnsupportedSigMethod(record.sig_method));
    }

    // 3. Message size
    if message.len() > MAX_MESSAGE_BYTES {
        return Err(ValidationError::MessageTooLarge {
            len: message.len(),
            max: MAX_MESSAGE_BYTES,
        });
    }

    // 4. Signature
    if !verify(&pubkey_bytes, &data_bytes, &sig_bytes) {
        return Err(ValidationError::SignatureInvalid);
    }
    let public_key = <[u8; 32]>::try_from(pubkey_bytes.as_slice())
        .map(Ed25519PublicKey::from_bytes)
        .map_err(|_| ValidationError::SignatureInvalid)?;

    Ok(ValidatedEnvelope {
        envelope: envelope.clone(),
        record,
        message,
        public_key,
    })
}

/// Validate an envelope fetched under `expected`.
///
/// Runs the full chain, then requires the envelope's public key to hash to
/// the requested endpoint.
pub fn validate_for_endpoint(
    envelope: &Envelope,
    expected: &str,
) -> Result<ValidatedEnvelope, ValidationError> {
    let validated = validate_envelope(envelope)?;
    let actual = validated.endpoint();
    if actual != expected {
        return Err(ValidationError::EndpointMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(validated)
}
