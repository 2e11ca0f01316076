//! Endpoints: content addresses derived from public keys.
//!
//! An endpoint is the base58 string of a multihash wrapping the BLAKE2b-256
//! digest of the raw public key:
//!
//! ```text
//! varint(0xb220) || varint(32) || blake2b_256(pubkey)
//! = a0 e4 02 20 || digest
//! ```
//!
//! Servers store an envelope under the endpoint of its `pubkey`, so a client
//! can re-derive the address and detect a server answering with the wrong key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::{decode_base58, encode_base58};
use crate::crypto::{Blake2b256Hash, Ed25519PublicKey};
use crate::error::CoreError;

/// Multihash function code for BLAKE2b-256.
pub const BLAKE2B_256_CODE: u64 = 0xb220;

/// Digest length carried in the multihash.
pub const DIGEST_LEN: usize = 32;

/// Varint-encoded multihash header for a BLAKE2b-256 digest.
const MULTIHASH_PREFIX: [u8; 4] = [0xa0, 0xe4, 0x02, 0x20];

/// A base58 multihash endpoint string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    /// Derive the endpoint for a public key. Deterministic.
    pub fn from_public_key(public_key: &Ed25519PublicKey) -> Self {
        let digest = Blake2b256Hash::hash(public_key.as_bytes());
        let mut multihash = Vec::with_capacity(MULTIHASH_PREFIX.len() + DIGEST_LEN);
        multihash.extend_from_slice(&MULTIHASH_PREFIX);
        multihash.extend_from_slice(digest.as_bytes());
        Self(encode_base58(&multihash))
    }

    /// Parse and check an endpoint string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let bytes = decode_base58(s)?;
        split_multihash(&bytes)?;
        Ok(Self(s.to_string()))
    }

    /// The wrapped digest.
    pub fn digest(&self) -> Result<[u8; 32], CoreError> {
        let bytes = decode_base58(&self.0)?;
        split_multihash(&bytes)
    }

    /// Whether this endpoint addresses the given public key.
    pub fn matches(&self, public_key: &Ed25519PublicKey) -> bool {
        *self == Self::from_public_key(public_key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn split_multihash(bytes: &[u8]) -> Result<[u8; 32], CoreError> {
    let (code, rest) = read_varint(bytes)?;
    if code != BLAKE2B_256_CODE {
        return Err(CoreError::MalformedEndpoint(format!(
            "unsupported multihash code {code:#x}"
        )));
    }
    let (len, digest) = read_varint(rest)?;
    if len != DIGEST_LEN as u64 || digest.len() != DIGEST_LEN {
        return Err(CoreError::MalformedEndpoint(format!(
            "digest length {} (declared {len}), expected {DIGEST_LEN}",
            digest.len()
        )));
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(digest);
    Ok(arr)
}

/// Read an unsigned LEB128 varint of at most 9 bytes (multiformats limit).
fn read_varint(bytes: &[u8]) -> Result<(u64, &[u8]), CoreError> {
    let mut value = 0u64;
    for (i, byte) in bytes.iter().enumerate().take(9) {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, &bytes[i + 1..]));
        }
    }
    Err(CoreError::MalformedEndpoint("truncated varint".into()))
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Endpoint({})", self.0)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Endpoint {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Endpoint {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;

    #[test]
    fn test_prefix_is_varint_of_code_and_length() {
        let (code, rest) = read_varint(&MULTIHASH_PREFIX).unwrap();
        assert_eq!(code, BLAKE2B_256_CODE);
        assert_eq!(rest, &[0x20u8][..]);
    }

    #[test]
    fn test_endpoint_deterministic() {
        let pk = Keypair::from_seed(&[0x42; 32]).public_key();
        assert_eq!(Endpoint::from_public_key(&pk), Endpoint::from_public_key(&pk));
    }

    #[test]
    fn test_distinct_keys_distinct_endpoints() {
        let a = Keypair::from_seed(&[0x01; 32]).public_key();
        let b = Keypair::from_seed(&[0x02; 32]).public_key();
        assert_ne!(Endpoint::from_public_key(&a), Endpoint::from_public_key(&b));
    }

    #[test]
    fn test_digest_is_blake2b_of_public_key() {
        let pk = Keypair::generate().public_key();
        let endpoint = Endpoint::from_public_key(&pk);
        let parsed = Endpoint::parse(endpoint.as_str()).unwrap();
        assert_eq!(parsed.digest().unwrap(), Blake2b256Hash::hash(pk.as_bytes()).0);
        assert!(parsed.matches(&pk));
    }

    #[test]
    fn test_known_endpoint() {
        let pk = Ed25519PublicKey::from_bytes([0u8; 32]);
        let endpoint = Endpoint::from_public_key(&pk);
        // base58 of a0e40220 || blake2b_256([0; 32])
        assert_eq!(
            endpoint.as_str(),
            "2DrjgbDYGTMmUSJzh8mFnTnRfeJXvWAcb5xQ53hkb4RzjuEjEa"
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(Endpoint::parse("0OIl"), Err(CoreError::Encoding(_))));

        // sha2-256 multihash (0x12) is not accepted.
        let mut sha = vec![0x12, 0x20];
        sha.extend_from_slice(&[0u8; 32]);
        assert!(matches!(
            Endpoint::parse(&encode_base58(&sha)),
            Err(CoreError::MalformedEndpoint(_))
        ));

        // Truncated digest.
        let mut short = MULTIHASH_PREFIX.to_vec();
        short.extend_from_slice(&[0u8; 16]);
        assert!(matches!(
            Endpoint::parse(&encode_base58(&short)),
            Err(CoreError::MalformedEndpoint(_))
        ));
    }
}
