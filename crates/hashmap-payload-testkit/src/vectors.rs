//! Golden test vectors for deterministic verification.
//!
//! Ed25519 signatures are deterministic, so a fixed seed, message, timestamp,
//! and ttl pin down every byte of the envelope. These vectors were produced
//! by an independent Ed25519/BLAKE2b implementation and must match exactly.

use hashmap_payload_core::{
    codec::decode_base64, DataRecord, Endpoint, Envelope, Keypair,
};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Seed for deterministic key generation.
    pub seed: [u8; 32],
    /// Message bytes.
    pub message: &'static [u8],
    /// Timestamp in nanoseconds.
    pub timestamp: i64,
    /// Requested ttl.
    pub ttl: u64,
    /// Expected base64 private key (`seed || pubkey`).
    pub expected_private_key: &'static str,
    /// Expected public key (hex).
    pub expected_pubkey: &'static str,
    /// Expected canonical record bytes.
    pub expected_data: &'static str,
    /// Expected signature (hex).
    pub expected_sig: &'static str,
    /// Expected endpoint.
    pub expected_endpoint: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "hello",
            seed: [0x42; 32],
            message: b"hello",
            timestamp: 1_736_870_400_000_000_000,
            ttl: 86_400,
            expected_private_key: "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkIhUvjRm3kdJEUyQuFfLqtst8/6e2pe0wCXlg4GmIHbEg==",
            expected_pubkey: "2152f8d19b791d24453242e15f2eab6cb7cffa7b6a5ed30097960e069881db12",
            expected_data: r#"{"message":"aGVsbG8=","timestamp":1736870400000000000,"sigMethod":"nacl-sign-ed25519","version":"0.0.1","ttl":86400}"#,
            expected_sig: "b0ce5928203eda6563da2ae0e8671aac98de266ad1cb46520e3a0dfe9d432ce39b5e7e5abdce26e3818a4137d0d6b800128d18fa2d4f986cb7cbed7e81184909",
            expected_endpoint: "2Drjgb6smsaRKdtdBXLUhFSc7NeGFUZhLsBAGQnmC7WgBd1tba",
        },
        GoldenVector {
            name: "single space message at epoch",
            seed: [0x01; 32],
            message: b" ",
            timestamp: 0,
            ttl: 86_400,
            expected_private_key: "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQGKiOPddAnxlf1S2y08ul1yymcJvx2UEhvzdIgBtA9vXA==",
            expected_pubkey: "8a88e3dd7409f195fd52db2d3cba5d72ca6709bf1d94121bf3748801b40f6f5c",
            expected_data: r#"{"message":"IA==","timestamp":0,"sigMethod":"nacl-sign-ed25519","version":"0.0.1","ttl":86400}"#,
            expected_sig: "701539f86ace315f86b431607601ebcd801a6f697b71b451ae6b13ee3c62e3067592fcaffecb8738278f039b64d034f7dca76f2a8a97866b14e684783254760a",
            expected_endpoint: "2DrjgbHaM19YwhgKuFuhUbbASGq1xDACbXUzVWyg7VEE4mCAc3",
        },
        GoldenVector {
            name: "maximum ttl",
            seed: [0x02; 32],
            message: b"test",
            timestamp: 1_736_870_400_123_456_789,
            ttl: 604_800,
            expected_private_key: "AgICAgICAgICAgICAgICAgICAgICAgICAgICAgICAgKBOXcOqH0XX1ajVGbDTH7My42KkbTuN6Jd9g9bj8mzlA==",
            expected_pubkey: "8139770ea87d175f56a35466c34c7ecccb8d8a91b4ee37a25df60f5b8fc9b394",
            expected_data: r#"{"message":"dGVzdA==","timestamp":1736870400123456789,"sigMethod":"nacl-sign-ed25519","version":"0.0.1","ttl":604800}"#,
            expected_sig: "65665b40e0614a572310a4a56d850a2990da661b5ff86c6f1ad00c99e87d96cfdc4988114f4d6990abdbea2a46e79df948646e6d8f5455cb1c49cfd14a24fb08",
            expected_endpoint: "2DrjgbHFhBokmkhvPXuz7YepQ4bcLC3eRC2gb2c8688CW2Gesr",
        },
    ]
}

/// Seal the envelope described by a golden vector.
pub fn generate_envelope_from_vector(vector: &GoldenVector) -> Envelope {
    let keypair = Keypair::from_seed(&vector.seed);
    let record = DataRecord::with_timestamp(vector.message, vector.timestamp, Some(vector.ttl))
        .expect("golden vector record is within limits");
    Envelope::seal(&keypair, &record).expect("golden vector envelope seals")
}

/// Check every vector against this implementation.
///
/// Returns `(name, matches)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let keypair = Keypair::from_seed(&v.seed);
            let envelope = generate_envelope_from_vector(v);

            let data = decode_base64(&envelope.data).unwrap_or_default();
            let sig = decode_base64(&envelope.sig).unwrap_or_default();
            let endpoint = Endpoint::from_public_key(&keypair.public_key());

            let matches = keypair.private_key() == v.expected_private_key
                && keypair.public_key().to_hex() == v.expected_pubkey
                && data == v.expected_data.as_bytes()
                && hex::encode(sig) == v.expected_sig
                && endpoint == v.expected_endpoint;

            (v.name.to_string(), matches)
        })
        .collect()
}
