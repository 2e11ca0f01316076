//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use hashmap_payload_core::{
    DataRecord, Ed25519PublicKey, Endpoint, Envelope, Keypair, ValidatedEnvelope,
};

/// A test fixture holding one author's keypair.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// The base64 private key, as callers pass it to `Payload::generate`.
    pub fn private_key(&self) -> String {
        self.keypair.private_key()
    }

    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// The endpoint this author's payloads are stored under.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from_public_key(&self.keypair.public_key())
    }

    /// Seal an envelope with the current time and default ttl.
    pub fn make_envelope(&self, message: &[u8]) -> Envelope {
        self.make_validated(message).envelope
    }

    /// Seal an envelope and keep its decoded parts.
    pub fn make_validated(&self, message: &[u8]) -> ValidatedEnvelope {
        let record = DataRecord::new(message, None).expect("fixture message within limits");
        Envelope::seal_validated(&self.keypair, &record).expect("fixture envelope seals")
    }

    /// Seal an envelope with a fixed timestamp and ttl.
    pub fn make_envelope_at(&self, message: &[u8], timestamp: i64, ttl: u64) -> Envelope {
        let record = DataRecord::with_timestamp(message, timestamp, Some(ttl))
            .expect("fixture record within limits");
        Envelope::seal(&self.keypair, &record).expect("fixture envelope seals")
    }

    /// The envelope as JSON text, as `Payload::import` accepts it.
    pub fn make_json(&self, message: &[u8]) -> String {
        self.make_envelope(message)
            .to_json()
            .expect("envelope serializes")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmap_payload_core::{validate_envelope, validate_for_endpoint, DATA_TTL_DEFAULT};

    #[test]
    fn test_fixture_envelope_validates() {
        let fixture = TestFixture::new();
        let validated = validate_envelope(&fixture.make_envelope(b"hello")).unwrap();

        assert_eq!(validated.message, b"hello");
        assert_eq!(validated.record.ttl, DATA_TTL_DEFAULT);
        assert_eq!(validated.endpoint(), fixture.endpoint());
    }

    #[test]
    fn test_fixture_private_key_round_trips() {
        let fixture = TestFixture::with_seed([0x07; 32]);
        let keypair = Keypair::from_private_key(&fixture.private_key()).unwrap();
        assert_eq!(keypair.public_key(), fixture.public_key());
    }

    #[test]
    fn test_fixed_timestamp_is_deterministic() {
        let fixture = TestFixture::with_seed([0x07; 32]);
        assert_eq!(
            fixture.make_envelope_at(b"m", 5, 60),
            fixture.make_envelope_at(b"m", 5, 60)
        );
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_fixtures(3);

        // Each party has unique keys and endpoints
        let endpoints: Vec<_> = parties.iter().map(|p| p.endpoint()).collect();
        assert_ne!(endpoints[0], endpoints[1]);
        assert_ne!(endpoints[1], endpoints[2]);
        assert_ne!(endpoints[0], endpoints[2]);

        let envelope = parties[0].make_envelope(b"mine");
        assert!(validate_for_endpoint(&envelope, endpoints[1].as_str()).is_err());
    }
}
