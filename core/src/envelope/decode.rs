//! envelope/decode.rs
//!
//! Envelope consumption: structural validation, integrity verification,
//! key derivation, per-field decryption.
//!
//! Design notes:
//! - The four stages are hard gates IN ORDER. In particular the tag is
//!   verified strictly before any field is decrypted, so tampered
//!   payloads never reach the decryption path.
//! - Stage 4 failures degrade per field: the recovered name maps to
//!   `null`, sibling fields keep going, and every failure lands in the
//!   [`DecodeReport`] for the caller's diagnostic sink. A single bad
//!   field must not abort the whole decode.

use serde_json::{Map, Value};

use crate::crypto::{decrypt_field_value, derive_field_key_32, recover_name, verify_tag, CryptoError};
use crate::envelope::types::{CodecError, Envelope, NoiseCodec};
use crate::telemetry::CodecCounters;

/// One field that failed to decrypt, deserialize, or recover its name.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    /// Recovered name if name recovery succeeded, otherwise the raw
    /// obfuscated key.
    pub name: String,
    /// Human-readable failure cause.
    pub reason: String,
}

/// Per-decode diagnostic report: the external sink for field-level
/// failures that never become terminal errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    pub failures: Vec<FieldFailure>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, name: impl Into<String>, err: &CryptoError) {
        self.failures.push(FieldFailure {
            name: name.into(),
            reason: err.to_string(),
        });
    }
}

/// Successful decode result: the recovered mapping plus the diagnostic
/// report. `payload` holds `null` for every individually-failed field.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    pub payload: Map<String, Value>,
    pub report: DecodeReport,
}

impl NoiseCodec {
    /// Decode an untrusted candidate envelope back to its payload.
    ///
    /// Terminal failures are structural (stage 1), integrity (stage 2),
    /// or a key-derivation error (stage 3). Per-field failures (stage 4)
    /// are degraded to `null` entries and surfaced in the report; the
    /// call still succeeds.
    ///
    /// # Errors
    /// - `CodecError::Structural` — required key missing/mistyped.
    /// - `CodecError::Integrity` — tag mismatch; possible tampering.
    /// - `CodecError::Crypto` — key derivation failed.
    pub fn decode(&self, candidate: &Value) -> Result<DecodeOutcome, CodecError> {
        self.decode_counted(candidate, &mut CodecCounters::default())
    }

    /// [`decode`](Self::decode) variant that records telemetry into the
    /// caller's counters.
    pub fn decode_counted(
        &self,
        candidate: &Value,
        counters: &mut CodecCounters,
    ) -> Result<DecodeOutcome, CodecError> {
        // Stage 1: structure. No cryptography yet.
        let envelope = Envelope::from_value(candidate)?;

        // Stage 2: integrity, keyed by the long-term secret. Constant-time.
        let canonical = envelope.canonical_fields()?;
        if verify_tag(&self.secret, &canonical, &envelope.tag).is_err() {
            counters.add_integrity_failure();
            return Err(CodecError::Integrity);
        }

        // Stage 3: key derivation from the envelope salt.
        let salt = hex::decode(&envelope.salt)
            .map_err(|_| CryptoError::InvalidSalt("not valid hex".into()))?;
        let key = derive_field_key_32(&self.secret, &salt)?;
        let iv = hex::decode(&envelope.iv)
            .map_err(|_| CryptoError::Failure("iv is not valid hex".into()))?;

        // Stage 4: per-field decryption, degraded per field.
        let mut report = DecodeReport::default();
        let mut payload = Map::with_capacity(envelope.fields.len());
        for (obfuscated, ciphertext) in &envelope.fields {
            let (name, outcome) = decode_field(&key, &iv, obfuscated, ciphertext);
            match outcome {
                Ok(value) => {
                    counters.add_field_recovered();
                    payload.insert(name, value);
                }
                Err(err) => {
                    counters.add_field_failure();
                    report.record(name.clone(), &err);
                    payload.insert(name, Value::Null);
                }
            }
        }

        counters.add_envelope_decoded();
        Ok(DecodeOutcome { payload, report })
    }
}

/// Decrypt and name-recover one field. Returns the best-known name
/// (recovered, or the raw obfuscated key when recovery itself failed)
/// alongside the value outcome.
fn decode_field(
    key: &[u8],
    iv: &[u8],
    obfuscated: &str,
    ciphertext: &Value,
) -> (String, Result<Value, CryptoError>) {
    let name = match recover_name(obfuscated) {
        Ok(name) => name.to_string(),
        Err(err) => return (obfuscated.to_string(), Err(err)),
    };

    let Some(ciphertext) = ciphertext.as_str() else {
        let err = CryptoError::PlaintextFormat("ciphertext entry is not a string".into());
        return (name, Err(err));
    };

    let outcome = decrypt_field_value(key, iv, ciphertext);
    (name, outcome)
}

/// One-shot convenience: construct a codec and decode in one call.
///
/// # Errors
/// Same as [`NoiseCodec::new`] and [`NoiseCodec::decode`].
pub fn decode(secret: impl AsRef<[u8]>, candidate: &Value) -> Result<DecodeOutcome, CodecError> {
    NoiseCodec::new(secret)?.decode(candidate)
}
