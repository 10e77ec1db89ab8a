//! crypto/cipher.rs
//! AES-256-CBC value encryption for individual envelope fields.
//!
//! Design notes:
//! - A field value is serialized to compact JSON text, encrypted with
//!   AES-256-CBC + PKCS#7 under the derived key and the envelope IV,
//!   then base64-encoded into the ciphertext string stored in `fields`.
//! - Decryption reverses the pipeline and re-parses the JSON, so the
//!   original value type (string, number, array, object, ...) survives
//!   the round trip.
//! - Every field in one envelope shares the same (key, IV) pair. This is
//!   the v1.0 wire contract; CBC under a fixed key/IV leaks equality of
//!   identical plaintext prefixes across sibling fields. Do not change
//!   without bumping `version`.
//!
//! Failure modes on decrypt:
//! - `DecryptFailed`: bad base64/length/padding — wrong key, wrong IV,
//!   or corrupted ciphertext. CBC cannot distinguish these.
//! - `PlaintextFormat`: padding happened to validate but the recovered
//!   bytes are not UTF-8 JSON.
//! Both are field-level failures for the codec, never terminal.

use crate::crypto::types::{CryptoError, IV_LEN, KEY_LEN_32};

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::Value;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

#[inline]
fn check_lens(key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
    if key.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        });
    }
    if iv.len() != IV_LEN {
        return Err(CryptoError::InvalidIvLen {
            expected: IV_LEN,
            actual: iv.len(),
        });
    }
    Ok(())
}

/// Encrypt one field value under the derived key and the shared envelope IV.
///
/// Returns the base64 ciphertext string stored in the envelope `fields`
/// mapping.
///
/// # Errors
/// - `CryptoError::InvalidKeyLen` / `InvalidIvLen` on wrong input sizes.
/// - `CryptoError::Failure` if the value cannot be serialized to JSON
///   (non-finite floats are the only way in).
pub fn encrypt_field_value(key: &[u8], iv: &[u8], value: &Value) -> Result<String, CryptoError> {
    check_lens(key, iv)?;

    let plaintext = serde_json::to_string(value)
        .map_err(|e| CryptoError::Failure(format!("value serialization failed: {}", e)))?;

    let enc = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.len(),
    })?;
    let ciphertext = enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(BASE64.encode(ciphertext))
}

/// Decrypt one field ciphertext string back to its JSON value.
///
/// # Errors
/// - `CryptoError::DecryptFailed` if the base64, block length, or PKCS#7
///   padding is invalid (wrong key/IV or corruption).
/// - `CryptoError::PlaintextFormat` if decryption succeeds but the
///   recovered bytes are not UTF-8 JSON.
pub fn decrypt_field_value(key: &[u8], iv: &[u8], ciphertext_b64: &str) -> Result<Value, CryptoError> {
    check_lens(key, iv)?;

    let ciphertext = BASE64
        .decode(ciphertext_b64)
        .map_err(|_| CryptoError::DecryptFailed)?;

    let dec = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.len(),
    })?;
    let plaintext = dec
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| CryptoError::DecryptFailed)?;

    let text = String::from_utf8(plaintext)
        .map_err(|_| CryptoError::PlaintextFormat("not valid UTF-8".into()))?;

    serde_json::from_str(&text)
        .map_err(|e| CryptoError::PlaintextFormat(format!("not valid JSON: {}", e)))
}
