#[cfg(test)]
mod tests {
    use envelope_core::crypto::{decrypt_field_value, encrypt_field_value, CryptoError};
    use proptest::prelude::*;
    use serde_json::{json, Value};

    const KEY: [u8; 32] = [0x11; 32];
    const IV: [u8; 16] = [0x22; 16];

// ## 1️⃣ Round-trip across value shapes

    #[test]
    fn test_string_round_trip() {
        let value = json!("john_doe");
        let ct = encrypt_field_value(&KEY, &IV, &value).unwrap();
        let back = decrypt_field_value(&KEY, &IV, &ct).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_nested_value_round_trip() {
        // Nested objects/arrays travel as one opaque value.
        let value = json!({ "roles": ["admin", "user"], "meta": { "active": true, "score": 4.5 } });
        let ct = encrypt_field_value(&KEY, &IV, &value).unwrap();
        let back = decrypt_field_value(&KEY, &IV, &ct).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_null_and_bool_round_trip() {
        for value in [Value::Null, json!(true), json!(false), json!(0), json!(-42)] {
            let ct = encrypt_field_value(&KEY, &IV, &value).unwrap();
            assert_eq!(decrypt_field_value(&KEY, &IV, &ct).unwrap(), value);
        }
    }

// ## 2️⃣ Failure modes

    #[test]
    fn test_wrong_key_fails() {
        let ct = encrypt_field_value(&KEY, &IV, &json!("secret")).unwrap();
        let wrong = [0x33u8; 32];
        // Bad padding or garbage JSON; either way it must not "succeed"
        // into the original value.
        match decrypt_field_value(&wrong, &IV, &ct) {
            Err(CryptoError::DecryptFailed) | Err(CryptoError::PlaintextFormat(_)) => {}
            Ok(v) => assert_ne!(v, json!("secret")),
            Err(e) => panic!("unexpected error kind: {}", e),
        }
    }

    #[test]
    fn test_corrupted_ciphertext_fails() {
        let ct = encrypt_field_value(&KEY, &IV, &json!("payload")).unwrap();
        let truncated = &ct[..ct.len() - 4];
        assert!(decrypt_field_value(&KEY, &IV, truncated).is_err());
    }

    #[test]
    fn test_non_base64_ciphertext_fails() {
        let err = decrypt_field_value(&KEY, &IV, "!!not-base64!!").unwrap_err();
        assert!(matches!(err, CryptoError::DecryptFailed));
    }

    #[test]
    fn test_invalid_key_and_iv_lengths_rejected() {
        let value = json!("x");
        assert!(matches!(
            encrypt_field_value(&[0u8; 16], &IV, &value).unwrap_err(),
            CryptoError::InvalidKeyLen { .. }
        ));
        assert!(matches!(
            encrypt_field_value(&KEY, &[0u8; 12], &value).unwrap_err(),
            CryptoError::InvalidIvLen { .. }
        ));
    }

// ## 3️⃣ Shared-IV contract

    #[test]
    fn test_identical_values_share_ciphertext_under_shared_iv() {
        // v1.0 wire contract: one (key, IV) pair per envelope. Equal
        // plaintexts therefore produce equal ciphertexts within an
        // envelope. Documented weakness, must hold until a version bump.
        let a = encrypt_field_value(&KEY, &IV, &json!("same")).unwrap();
        let b = encrypt_field_value(&KEY, &IV, &json!("same")).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_string_values_round_trip(s in ".{0,64}") {
            let value = json!(s);
            let ct = encrypt_field_value(&KEY, &IV, &value).unwrap();
            prop_assert_eq!(decrypt_field_value(&KEY, &IV, &ct).unwrap(), value);
        }
    }
}
