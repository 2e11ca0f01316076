//! # Hashmap Payload Core
//!
//! Pure primitives for hashmap payloads: canonical records, signing,
//! endpoints, and the envelope validation chain.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`DataRecord`] - The canonical body that gets signed
//! - [`Envelope`] - The signed wire unit (`data`, `pubkey`, `sig`)
//! - [`Endpoint`] - Content address of a public key (BLAKE2b-256 multihash, base58)
//! - [`Keypair`] - Ed25519 signing key in the NaCl 64-byte layout
//!
//! ## Canonicalization
//!
//! Records are encoded as compact JSON with a fixed field order. See [`codec`] module.

pub mod codec;
pub mod crypto;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod record;
pub mod signer;
pub mod validation;

pub use codec::{decode_record, encode_record, unix_nano_now};
pub use crypto::{
    generate_private_key, public_key_from_private_key, Blake2b256Hash, Ed25519PublicKey,
    Ed25519Signature, Keypair,
};
pub use endpoint::Endpoint;
pub use envelope::Envelope;
pub use error::{CoreError, ValidationError};
pub use record::{
    DataRecord, DATA_TTL_DEFAULT, DATA_TTL_MAX, DEFAULT_MESSAGE, DEFAULT_SIG_METHOD, MAX_MESSAGE_BYTES,
    VERSION,
};
pub use signer::{sign, verify};
pub use validation::{validate_envelope, validate_for_endpoint, ValidatedEnvelope};
