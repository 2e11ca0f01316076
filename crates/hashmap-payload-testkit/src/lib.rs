//! # Hashmap Payload Testkit
//!
//! Testing utilities for hashmap payloads.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known envelopes with expected bytes for cross-implementation checks
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//! - **Server**: An in-memory hashmap server implementing `Transport`
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hashmap_payload_testkit::vectors::{all_vectors, generate_envelope_from_vector};
//!
//! for vector in all_vectors() {
//!     let envelope = generate_envelope_from_vector(&vector);
//!     assert_eq!(envelope.pubkey.len(), 44);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashmap_payload_testkit::generators::{envelope_from_params, EnvelopeParams};
//!
//! proptest! {
//!     #[test]
//!     fn sealing_is_deterministic(params: EnvelopeParams) {
//!         prop_assert_eq!(envelope_from_params(&params), envelope_from_params(&params));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use hashmap_payload_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let envelope = fixture.make_envelope(b"hello");
//! ```

pub mod fixtures;
pub mod generators;
pub mod server;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{envelope_from_params, EnvelopeParams};
pub use server::{HashmapServer, DEFAULT_BASE_URI};
pub use vectors::{all_vectors, generate_envelope_from_vector, verify_all_vectors, GoldenVector};
