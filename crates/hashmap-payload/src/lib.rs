//! # Hashmap Payload
//!
//! Client for signed, content-addressed payloads stored on a hashmap server.
//!
//! ## Overview
//!
//! - **Envelopes**: a canonical record, the author's public key, and an
//!   ed25519 signature over the record bytes
//! - **Endpoints**: the BLAKE2b-256 multihash of the public key, base58
//! - **Validation**: every generated, imported, or fetched envelope passes
//!   the same ordered chain before its content is exposed
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hashmap_payload::{Client, ClientConfig, GenerateOptions, PayloadOptions};
//! use hashmap_payload::core::generate_private_key;
//!
//! async fn example() -> hashmap_payload::Result<()> {
//!     let client = Client::new(
//!         ClientConfig::default().with_default_uri("https://prototype.hashmap.sh"),
//!     )?;
//!
//!     let key = generate_private_key();
//!     let mut payload = client.payload(PayloadOptions::default());
//!     payload.generate(&key, b"hello, world", GenerateOptions::default())?;
//!     payload.post(None).await?;
//!
//!     let endpoint = payload.validated()?.endpoint();
//!     let mut fetched = client.payload(PayloadOptions::default().endpoint(endpoint.as_str()));
//!     fetched.get(None, None).await?;
//!     println!("{}", fetched.message()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `hashmap_payload::core` - Records, keys, endpoints, validation
//! - `hashmap_payload::transport` - Transport trait and implementations

pub mod client;
pub mod config;
pub mod error;
pub mod payload;

// Re-export component crates
pub use hashmap_payload_core as core;
pub use hashmap_payload_transport as transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use payload::{GenerateOptions, Payload, PayloadOptions, PayloadState};

// Re-export commonly used core types
pub use hashmap_payload_core::{
    DataRecord, Endpoint, Envelope, Keypair, ValidatedEnvelope, DATA_TTL_DEFAULT, DATA_TTL_MAX,
    DEFAULT_MESSAGE, DEFAULT_SIG_METHOD, MAX_MESSAGE_BYTES, VERSION,
};
