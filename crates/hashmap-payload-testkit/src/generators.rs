//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hashmap_payload_core::{
    DataRecord, Ed25519PublicKey, Envelope, Keypair, DATA_TTL_MAX, MAX_MESSAGE_BYTES,
};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random Ed25519PublicKey.
pub fn public_key() -> impl Strategy<Value = Ed25519PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate a reasonable timestamp in nanoseconds.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Generate a ttl that resolves without error.
pub fn ttl() -> impl Strategy<Value = u64> {
    1u64..=DATA_TTL_MAX
}

/// Generate message bytes of specified max length.
pub fn message(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Parameters for sealing an envelope.
#[derive(Debug, Clone)]
pub struct EnvelopeParams {
    pub keypair: Keypair,
    pub message: Vec<u8>,
    pub timestamp: i64,
    pub ttl: u64,
}

impl Arbitrary for EnvelopeParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (keypair(), message(MAX_MESSAGE_BYTES), timestamp(), ttl())
            .prop_map(|(keypair, message, timestamp, ttl)| EnvelopeParams {
                keypair,
                message,
                timestamp,
                ttl,
            })
            .boxed()
    }
}

/// Seal an envelope from parameters.
pub fn envelope_from_params(params: &EnvelopeParams) -> Envelope {
    let record = DataRecord::with_timestamp(&params.message, params.timestamp, Some(params.ttl))
        .expect("generated record within limits");
    Envelope::seal(&params.keypair, &record).expect("generated envelope seals")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmap_payload_core::codec::{decode_base64, encode_base64};
    use hashmap_payload_core::{
        decode_record, encode_record, validate_envelope, validate_for_endpoint, Endpoint,
        ValidationError,
    };

    proptest! {
        #[test]
        fn test_sealed_envelope_validates(params: EnvelopeParams) {
            let envelope = envelope_from_params(&params);
            let validated = validate_envelope(&envelope).unwrap();

            prop_assert_eq!(validated.message, params.message);
            prop_assert_eq!(validated.record.timestamp, params.timestamp);
            prop_assert_eq!(validated.record.ttl, params.ttl);
            prop_assert_eq!(validated.public_key, params.keypair.public_key());
        }

        #[test]
        fn test_sealing_is_deterministic(params: EnvelopeParams) {
            prop_assert_eq!(envelope_from_params(&params), envelope_from_params(&params));
        }

        #[test]
        fn test_validates_under_own_endpoint(params: EnvelopeParams) {
            let envelope = envelope_from_params(&params);
            let endpoint = Endpoint::from_public_key(&params.keypair.public_key());

            prop_assert!(validate_for_endpoint(&envelope, endpoint.as_str()).is_ok());
        }

        #[test]
        fn test_tampered_record_fails_signature(params: EnvelopeParams) {
            let mut envelope = envelope_from_params(&params);

            let mut record = decode_record(&decode_base64(&envelope.data).unwrap()).unwrap();
            record.timestamp += 1;
            envelope.data = encode_base64(&encode_record(&record).unwrap());

            prop_assert!(matches!(
                validate_envelope(&envelope),
                Err(ValidationError::SignatureInvalid)
            ));
        }

        #[test]
        fn test_flipped_data_byte_is_rejected(
            params in any::<EnvelopeParams>(),
            index in any::<prop::sample::Index>(),
            mask in 1u8..=255,
        ) {
            let mut envelope = envelope_from_params(&params);

            let mut data = decode_base64(&envelope.data).unwrap();
            let at = index.index(data.len());
            data[at] ^= mask;
            envelope.data = encode_base64(&data);

            // Broken JSON stops at the record stage. A flip that keeps the JSON
            // valid may still trip the scheme or size check before the signature.
            let rejected = matches!(
                validate_envelope(&envelope),
                Err(ValidationError::SignatureInvalid)
                    | Err(ValidationError::MalformedRecord(_))
                    | Err(ValidationError::UnsupportedSigMethod(_))
                    | Err(ValidationError::MessageTooLarge { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn test_foreign_endpoint_mismatches(a in any::<EnvelopeParams>(), other in public_key()) {
            prop_assume!(a.keypair.public_key() != other);

            let envelope = envelope_from_params(&a);
            let foreign = Endpoint::from_public_key(&other);

            let is_mismatch = matches!(
                validate_for_endpoint(&envelope, foreign.as_str()),
                Err(ValidationError::EndpointMismatch { .. })
            );
            prop_assert!(is_mismatch);
        }

        #[test]
        fn test_oversized_message_rejected(
            kp in keypair(),
            extra in 1usize..64,
        ) {
            let record = DataRecord::with_timestamp(&vec![0u8; MAX_MESSAGE_BYTES + extra], 0, None);
            prop_assert!(record.is_err());

            // A hand-built record bypassing the constructor still fails validation
            let mut record = DataRecord::with_timestamp(b"", 0, None).unwrap();
            record.message = encode_base64(&vec![0u8; MAX_MESSAGE_BYTES + extra]);
            let data = encode_record(&record).unwrap();
            let envelope = Envelope {
                data: encode_base64(&data),
                pubkey: kp.public_key().to_base64(),
                sig: kp.sign(&data).to_base64(),
            };

            let is_too_large = matches!(
                validate_envelope(&envelope),
                Err(ValidationError::MessageTooLarge { .. })
            );
            prop_assert!(is_too_large);
        }
    }
}
