//! envelope/encode.rs
//!
//! Envelope assembly: timestamp + fresh randomness, key derivation,
//! per-field transform, integrity tag.
//!
//! Design notes:
//! - Input is a flat JSON object. Nested objects/arrays are serialized
//!   as opaque values, not recursively transformed field-by-field.
//! - Every input field produces exactly one output field and no value is
//!   left unencrypted.
//! - The tag is computed LAST, over the fully assembled `fields` mapping
//!   exactly as transmitted, keyed by the long-term secret.
//! - `salt` and `iv` are drawn fresh from the OS CSPRNG per envelope.
//!   Reuse across envelopes is a confidentiality defect, not a style
//!   issue.

use rand::rngs::OsRng;
use rand::RngCore;
use serde_json::{Map, Value};

use crate::constants::{IV_LEN, PROTOCOL_VERSION, SALT_LEN};
use crate::crypto::{compute_tag, derive_field_key_32, encrypt_field_value, obfuscate_name};
use crate::envelope::types::{CodecError, Envelope, NoiseCodec};
use crate::telemetry::CodecCounters;

impl NoiseCodec {
    /// Encode an arbitrary flat JSON object into a noisy envelope.
    ///
    /// # Errors
    /// - `CodecError::Input` if `payload` is not a JSON object or
    ///   contains an empty field name (an empty name cannot survive the
    ///   obfuscation round trip).
    /// - `CodecError::Crypto` if key derivation or value serialization
    ///   fails.
    pub fn encode(&self, payload: &Value) -> Result<Envelope, CodecError> {
        self.encode_counted(payload, &mut CodecCounters::default())
    }

    /// [`encode`](Self::encode) variant that records telemetry into the
    /// caller's counters.
    pub fn encode_counted(
        &self,
        payload: &Value,
        counters: &mut CodecCounters,
    ) -> Result<Envelope, CodecError> {
        let object = payload
            .as_object()
            .ok_or_else(|| CodecError::Input("payload must be a JSON object".into()))?;
        if object.keys().any(|name| name.is_empty()) {
            return Err(CodecError::Input("field names must not be empty".into()));
        }

        let timestamp = chrono::Utc::now().timestamp_millis();

        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);

        let key = derive_field_key_32(&self.secret, &salt)?;

        // Input order becomes insertion order becomes canonical tag order.
        let mut fields = Map::with_capacity(object.len());
        for (name, value) in object {
            let obfuscated = obfuscate_name(name, timestamp);
            let ciphertext = encrypt_field_value(&key, &iv, value)?;
            fields.insert(obfuscated, Value::String(ciphertext));
            counters.add_field_encrypted();
        }

        let mut envelope = Envelope {
            version: PROTOCOL_VERSION.to_string(),
            timestamp,
            salt: hex::encode(salt),
            iv: hex::encode(iv),
            fields,
            tag: String::new(),
        };
        envelope.tag = compute_tag(&self.secret, &envelope.canonical_fields()?);

        counters.add_envelope_encoded();
        Ok(envelope)
    }
}

/// One-shot convenience: construct a codec and encode in one call.
///
/// # Errors
/// Same as [`NoiseCodec::new`] and [`NoiseCodec::encode`].
pub fn encode(secret: impl AsRef<[u8]>, payload: &Value) -> Result<Envelope, CodecError> {
    NoiseCodec::new(secret)?.encode(payload)
}
