//! crypto/kdf.rs
//! PBKDF2-based per-envelope key derivation from the long-term secret
//! and the envelope salt.
//!
//! Design:
//! - PBKDF2-HMAC-SHA256(secret, salt, PBKDF2_ITERATIONS) -> 32-byte key
//! - Salt must be random per envelope. Iteration count and key size are
//!   protocol constants, never carried on the wire.
//!
//! Security notes:
//! - Never use the long-term secret directly as a cipher key; always
//!   derive. The secret keys the integrity tag, the derived key feeds
//!   the field cipher — the split is what makes wrong-key rejection
//!   happen at tag verification, before any decryption.
//! - Same (secret, salt) pair must yield the same key on both sides.

use crate::constants::PBKDF2_ITERATIONS;
use crate::crypto::types::{CryptoError, KEY_LEN_32, SALT_LEN};

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// Derive a 32-byte per-envelope field key from the long-term secret and
/// a 16-byte salt.
///
/// Deterministic: same `(secret, salt)` -> same key. Runs on the encode
/// path with a fresh random salt and on the decode path with the salt
/// taken from the candidate envelope.
///
/// # Errors
/// - `CryptoError::InvalidSalt` if the salt has the wrong length or is
///   all zeros (an all-zero salt is a broken RNG, not a valid envelope).
#[inline]
pub fn derive_field_key_32(secret: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN_32], CryptoError> {
    if salt.len() != SALT_LEN {
        return Err(CryptoError::InvalidSalt(format!(
            "expected {} bytes, got {}",
            SALT_LEN,
            salt.len()
        )));
    }
    if salt.iter().all(|&b| b == 0) {
        return Err(CryptoError::InvalidSalt("salt must not be all-zero".into()));
    }

    let mut key = [0u8; KEY_LEN_32];
    pbkdf2_hmac::<Sha256>(secret, salt, PBKDF2_ITERATIONS, &mut key);
    Ok(key)
}
