//! Wire compatibility with envelopes produced by other implementations.
//!
//! Every implementation must accept these envelopes byte for byte and derive
//! the same endpoint from them.

use hashmap_payload::core::{validate_for_endpoint, ValidationError};
use hashmap_payload::transport::MemoryTransport;
use hashmap_payload::{Client, ClientConfig, ClientError, Envelope, PayloadOptions};
use hashmap_payload_testkit::vectors::{all_vectors, generate_envelope_from_vector};

/// The "hello" vector as it travels over the wire.
const HELLO_ENVELOPE: &str = r#"{"data":"eyJtZXNzYWdlIjoiYUdWc2JHOD0iLCJ0aW1lc3RhbXAiOjE3MzY4NzA0MDAwMDAwMDAwMDAsInNpZ01ldGhvZCI6Im5hY2wtc2lnbi1lZDI1NTE5IiwidmVyc2lvbiI6IjAuMC4xIiwidHRsIjo4NjQwMH0=","pubkey":"IVL40Zt5HSRFMkLhXy6rbLfP+ntqXtMAl5YOBpiB2xI=","sig":"sM5ZKCA+2mVj2irg6GcarJjeJmrRy0ZSDjoN/p1DLOObXn5avc4m44GKQTfQ1rgAEo0Y+i1PmGy3y+1+gRhJCQ=="}"#;

const HELLO_ENDPOINT: &str = "2Drjgb6smsaRKdtdBXLUhFSc7NeGFUZhLsBAGQnmC7WgBd1tba";

fn client() -> Client<MemoryTransport> {
    Client::with_transport(MemoryTransport::new(), ClientConfig::default())
}

#[test]
fn test_import_wire_envelope() {
    let mut payload = client().payload(PayloadOptions::default());
    let validated = payload.import(HELLO_ENVELOPE).unwrap();

    assert_eq!(validated.endpoint(), HELLO_ENDPOINT);
    assert_eq!(validated.record.timestamp, 1_736_870_400_000_000_000);
    assert_eq!(payload.message().unwrap(), "hello");
}

#[test]
fn test_sealed_vector_serializes_to_wire_bytes() {
    let hello = all_vectors()
        .into_iter()
        .find(|v| v.name == "hello")
        .unwrap();

    let envelope = generate_envelope_from_vector(&hello);
    assert_eq!(envelope.to_json().unwrap(), HELLO_ENVELOPE);
}

#[test]
fn test_envelope_field_order_is_irrelevant() {
    let envelope = Envelope::from_json(HELLO_ENVELOPE).unwrap();
    let reordered = format!(
        r#"{{ "sig": "{}", "data": "{}", "pubkey": "{}" }}"#,
        envelope.sig, envelope.data, envelope.pubkey
    );

    let mut payload = client().payload(PayloadOptions::default());
    assert!(payload.import(&reordered).is_ok());
}

#[test]
fn test_wire_envelope_under_wrong_endpoint() {
    let wrong = all_vectors()
        .into_iter()
        .find(|v| v.name != "hello")
        .unwrap()
        .expected_endpoint;

    let envelope = Envelope::from_json(HELLO_ENVELOPE).unwrap();
    let err = validate_for_endpoint(&envelope, wrong).unwrap_err();
    assert!(matches!(err, ValidationError::EndpointMismatch { .. }));
}

#[test]
fn test_every_vector_imports() {
    for vector in all_vectors() {
        let json = generate_envelope_from_vector(&vector).to_json().unwrap();
        let mut payload = client().payload(PayloadOptions::default());

        let endpoint = payload.import(&json).unwrap().endpoint();
        assert_eq!(endpoint, vector.expected_endpoint, "vector '{}'", vector.name);
        assert_eq!(payload.message_bytes().unwrap(), vector.message);
    }
}

#[test]
fn test_flipped_signature_bit_is_rejected() {
    let mut envelope = Envelope::from_json(HELLO_ENVELOPE).unwrap();
    // 'sM5Z' -> 'tM5Z' changes the first signature byte only
    envelope.sig.replace_range(0..1, "t");

    let mut payload = client().payload(PayloadOptions::default());
    assert!(matches!(
        payload.validate(envelope),
        Err(ClientError::Validation(ValidationError::SignatureInvalid))
    ));
}
