//! Ed25519 signing and verification over raw byte slices.
//!
//! `verify` never errors: every malformed input is reported as an invalid
//! signature so callers surface one uniform failure.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::crypto::{Ed25519Signature, Keypair};
use crate::error::CoreError;

/// Sign `message` with a base64 NaCl private key.
pub fn sign(private_key: &str, message: &[u8]) -> Result<Ed25519Signature, CoreError> {
    let keypair = Keypair::from_private_key(private_key)?;
    Ok(keypair.sign(message))
}

/// Check a signature over exactly `message` under `public_key`.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let Ok(key_bytes) = <[u8; 32]>::try_from(public_key) else {
        return false;
    };
    let Ok(sig_bytes) = <[u8; 64]>::try_from(signature) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };
    verifying_key
        .verify(message, &Signature::from_bytes(&sig_bytes))
        .is_ok()
}
