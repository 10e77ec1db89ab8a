//! crypto/tag.rs
//! Keyed integrity tag over the canonical `fields` serialization.
//!
//! Design notes:
//! - HMAC-SHA256 keyed by the LONG-TERM secret, not the derived key.
//!   The decoder verifies the tag before deriving any key or touching
//!   any ciphertext, so a wrong secret or a tampered payload is rejected
//!   up front as an integrity error.
//! - The tag input is the compact JSON serialization of the `fields`
//!   mapping in insertion order. Both sides must reproduce it
//!   byte-for-byte; the envelope type guarantees order preservation.
//! - Verification is constant-time via `Mac::verify_slice`.

use crate::crypto::types::CryptoError;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[inline]
fn mac(secret: &[u8]) -> HmacSha256 {
    // HMAC-SHA256 accepts keys of any length.
    HmacSha256::new_from_slice(secret).expect("HMAC key size is always valid")
}

/// Compute the hex-encoded integrity tag over the canonical `fields`
/// bytes.
#[inline]
pub fn compute_tag(secret: &[u8], canonical_fields: &[u8]) -> String {
    let mut m = mac(secret);
    m.update(canonical_fields);
    hex::encode(m.finalize().into_bytes())
}

/// Verify a supplied hex tag against the canonical `fields` bytes.
///
/// Comparison of the MAC output is constant-time. A non-hex or
/// wrong-length supplied tag fails without leaking anything beyond
/// "mismatch".
///
/// # Errors
/// - `CryptoError::Failure` carrying "integrity tag mismatch" on any
///   failure; callers map it to their integrity error kind.
pub fn verify_tag(secret: &[u8], canonical_fields: &[u8], supplied_hex: &str) -> Result<(), CryptoError> {
    let mismatch = || CryptoError::Failure("integrity tag mismatch".into());

    let supplied = hex::decode(supplied_hex).map_err(|_| mismatch())?;

    let mut m = mac(secret);
    m.update(canonical_fields);
    m.verify_slice(&supplied).map_err(|_| mismatch())
}
