//! Cryptographic primitives for hashmap payloads.
//!
//! Wraps Ed25519 signing and BLAKE2b-256 hashing with strong types.
//!
//! Private keys travel as the 64-byte NaCl layout, `seed || public_key`,
//! encoded as base64 (88 characters).

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Signer, SigningKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::{decode_base64, encode_base64};
use crate::error::CoreError;

/// Length of the NaCl private key encoding.
pub const PRIVATE_KEY_LEN: usize = 64;

/// A 32-byte BLAKE2b-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blake2b256Hash(pub [u8; 32]);

impl Blake2b256Hash {
    /// Compute the unkeyed BLAKE2b-256 hash of the given data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Blake2b::<U32>::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Blake2b256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blake2b256({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Blake2b256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ed25519PublicKey(pub [u8; 32]);

impl Ed25519PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Standard base64, as carried in the envelope `pubkey` field.
    pub fn to_base64(&self) -> String {
        encode_base64(&self.0)
    }

    /// Parse from base64; the decoded key must be exactly 32 bytes.
    pub fn from_base64(s: &str) -> Result<Self, CoreError> {
        let bytes = decode_base64(s)?;
        let arr: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            CoreError::InvalidKeyEncoding(format!("public key is {} bytes, expected 32", bytes.len()))
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Pub({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Ed25519PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; 64]);

impl Ed25519Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Standard base64, as carried in the envelope `sig` field.
    pub fn to_base64(&self) -> String {
        encode_base64(&self.0)
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Sig({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for Ed25519Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

/// A keypair for signing payloads.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Parse a base64 NaCl private key (`seed || public_key`).
    ///
    /// The public half must match the key derived from the seed.
    pub fn from_private_key(private_key: &str) -> Result<Self, CoreError> {
        let bytes = decode_private_key(private_key)?;
        let signing_key = SigningKey::from_keypair_bytes(&bytes).map_err(|_| {
            CoreError::InvalidKeyEncoding("public half does not match seed".into())
        })?;
        Ok(Self { signing_key })
    }

    /// The base64 NaCl private key encoding (88 characters).
    pub fn private_key(&self) -> String {
        encode_base64(&self.signing_key.to_keypair_bytes())
    }

    /// Get the public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let sig = self.signing_key.sign(message);
        Ed25519Signature(sig.to_bytes())
    }

    /// Get the raw seed bytes (secret key material).
    pub fn seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.public_key())
    }
}

/// Generate a fresh base64 NaCl private key.
pub fn generate_private_key() -> String {
    Keypair::generate().private_key()
}

/// Extract the public key from a base64 NaCl private key.
///
/// Pure extraction of bytes 32..64; the seed is not consulted.
pub fn public_key_from_private_key(private_key: &str) -> Result<Ed25519PublicKey, CoreError> {
    let bytes = decode_private_key(private_key)?;
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes[32..]);
    Ok(Ed25519PublicKey(arr))
}

fn decode_private_key(private_key: &str) -> Result<[u8; PRIVATE_KEY_LEN], CoreError> {
    let bytes = decode_base64(private_key)
        .map_err(|e| CoreError::InvalidKeyEncoding(e.to_string()))?;
    bytes.as_slice().try_into().map_err(|_| {
        CoreError::InvalidKeyEncoding(format!(
            "private key is {} bytes, expected {PRIVATE_KEY_LEN}",
            bytes.len()
        ))
    })
}
