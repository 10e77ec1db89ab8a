//! envelope/types.rs
//! The envelope wire type, the codec value, and the codec error taxonomy.
//!
//! Industry notes:
//! - The envelope is JSON on the wire. `fields` is an insertion-ordered
//!   mapping (serde_json `preserve_order`) so the canonical bytes the
//!   integrity tag covers are byte-reproducible on both sides.
//! - Structural validation runs over an untrusted `serde_json::Value`
//!   with explicit per-key checks, NOT via derive-deserialization, so a
//!   malformed candidate is rejected with a structural error naming the
//!   offending key before any cryptography happens.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::{IV_LEN, PROTOCOL_VERSION, SALT_LEN};
use crate::crypto::CryptoError;

/// The unit exchanged between encoder and decoder.
///
/// Immutable once assembled: constructed wholesale by one `encode` call
/// and consumed wholesale by one `decode` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Fixed protocol tag, currently "1.0".
    pub version: String,
    /// Epoch milliseconds at encode time. Obfuscation input only; not
    /// independently validated in v1.0 (no replay window).
    pub timestamp: i64,
    /// Hex-encoded 16-byte random salt (key derivation input).
    pub salt: String,
    /// Hex-encoded 16-byte random IV (shared by every field cipher).
    pub iv: String,
    /// Obfuscated name -> base64 ciphertext, in insertion order.
    pub fields: Map<String, Value>,
    /// Hex HMAC-SHA256 over the canonical `fields` serialization, keyed
    /// by the long-term secret. Always computed last; never covers itself.
    pub tag: String,
}

impl Envelope {
    /// Canonical bytes the integrity tag covers: the compact JSON
    /// serialization of `fields` in insertion order.
    pub fn canonical_fields(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(&self.fields)
            .map_err(|e| CodecError::Structural(format!("fields are not serializable: {}", e)))
    }

    /// Render the envelope as a `serde_json::Value` for transport.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("envelope is always JSON-representable")
    }

    /// Parse and structurally validate an untrusted candidate envelope.
    ///
    /// Every required top-level key must be present, correctly typed,
    /// and non-empty/non-zero. `salt` and `iv` must be well-formed hex
    /// of exactly 16 bytes. Nothing cryptographic is touched here.
    ///
    /// # Errors
    /// - `CodecError::Structural` naming the first offending key.
    pub fn from_value(candidate: &Value) -> Result<Self, CodecError> {
        let obj = candidate
            .as_object()
            .ok_or_else(|| CodecError::Structural("envelope is not a JSON object".into()))?;

        let missing = |key: &str| CodecError::Structural(format!("missing required key `{}`", key));
        let invalid =
            |key: &str, why: &str| CodecError::Structural(format!("invalid `{}`: {}", key, why));

        let get_str = |key: &'static str| -> Result<String, CodecError> {
            let v = obj.get(key).ok_or_else(|| missing(key))?;
            let s = v.as_str().ok_or_else(|| invalid(key, "expected a string"))?;
            if s.is_empty() {
                return Err(invalid(key, "must not be empty"));
            }
            Ok(s.to_string())
        };

        let version = get_str("version")?;

        let timestamp = obj
            .get("timestamp")
            .ok_or_else(|| missing("timestamp"))?
            .as_i64()
            .ok_or_else(|| invalid("timestamp", "expected an integer"))?;
        if timestamp == 0 {
            return Err(invalid("timestamp", "must not be zero"));
        }

        let salt = get_str("salt")?;
        check_hex_len("salt", &salt, SALT_LEN)?;
        let iv = get_str("iv")?;
        check_hex_len("iv", &iv, IV_LEN)?;

        let fields = obj
            .get("fields")
            .ok_or_else(|| missing("fields"))?
            .as_object()
            .ok_or_else(|| invalid("fields", "expected an object"))?
            .clone();

        let tag = get_str("tag")?;

        Ok(Self {
            version,
            timestamp,
            salt,
            iv,
            fields,
            tag,
        })
    }
}

#[inline]
fn check_hex_len(key: &str, value: &str, want_bytes: usize) -> Result<(), CodecError> {
    match hex::decode(value) {
        Ok(bytes) if bytes.len() == want_bytes => Ok(()),
        Ok(bytes) => Err(CodecError::Structural(format!(
            "invalid `{}`: expected {} bytes, got {}",
            key, want_bytes, bytes.len()
        ))),
        Err(_) => Err(CodecError::Structural(format!(
            "invalid `{}`: not valid hex",
            key
        ))),
    }
}

/// Terminal codec failures.
///
/// Field-level decode failures are NOT here: they degrade to `null`
/// entries in the output mapping and are reported through
/// [`DecodeReport`](crate::envelope::DecodeReport) instead.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Missing/empty long-term secret at construction time. Fatal to
    /// the codec instance, raised before first use.
    #[error("configuration error: {0}")]
    Config(String),

    /// `encode` called with a payload that is not a JSON object.
    #[error("encoding failed: {0}")]
    Input(String),

    /// Candidate envelope missing or mistyping a required top-level key.
    #[error("decoding failed: structural error: {0}")]
    Structural(String),

    /// Computed tag does not match the supplied tag. Possible tampering
    /// or corruption; raised strictly before any field decryption.
    #[error("decoding failed: integrity tag mismatch")]
    Integrity,

    /// A crypto primitive failed outside the per-field path (key
    /// derivation, value serialization during encode).
    #[error("crypto failure: {0}")]
    Crypto(#[from] CryptoError),
}

/// Symmetric encoder/decoder over one long-term secret.
///
/// Stateless across calls: every encode/decode invocation is
/// self-contained and the codec may be shared across threads freely.
#[derive(Clone)]
pub struct NoiseCodec {
    pub(crate) secret: Vec<u8>,
}

impl NoiseCodec {
    /// Construct a codec around the long-term shared secret.
    ///
    /// # Errors
    /// - `CodecError::Config` if the secret is empty. Raised here, not
    ///   deferred to first use.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, CodecError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(CodecError::Config("secret must not be empty".into()));
        }
        Ok(Self {
            secret: secret.to_vec(),
        })
    }

    /// Protocol version this codec speaks.
    pub fn version(&self) -> &'static str {
        PROTOCOL_VERSION
    }
}

impl fmt::Debug for NoiseCodec {
    // Never expose the secret through Debug.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseCodec").finish_non_exhaustive()
    }
}
