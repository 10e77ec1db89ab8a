//! crypto/obfuscate.rs
//! Field-name obfuscation: append a timestamp-salted hash suffix.
//!
//! Design notes:
//! - `obfuscate_name` hashes `name || decimal(timestamp_ms)` with
//!   SHA-256, takes the first 8 lowercase-hex characters, and joins them
//!   to the name with an underscore: `"<name>_<8hex>"`. The timestamp
//!   changes per encode call, so the visible key changes on every
//!   envelope, defeating naive static matching.
//! - This is obfuscation, NOT encryption: the plaintext name is a
//!   visible substring of the obfuscated name. No confidentiality claim.
//! - Recovery splits on the LAST underscore and requires the trailing
//!   piece to be exactly 8 hex characters. Splitting on the first
//!   occurrence would corrupt any name that itself contains an
//!   underscore; the fixed-length validated suffix makes recovery
//!   unambiguous for arbitrary names while keeping the v1.0 wire format.

use crate::constants::{NAME_DELIMITER, NAME_TAG_HEX_LEN};
use crate::crypto::types::CryptoError;

use sha2::{Digest, Sha256};

/// Obfuscate a field name for one envelope.
///
/// Same `(name, timestamp)` -> same obfuscated name, so sibling
/// envelopes encoded in the same millisecond agree and everything else
/// differs.
#[inline]
pub fn obfuscate_name(name: &str, timestamp_ms: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(timestamp_ms.to_string().as_bytes());
    let digest = hasher.finalize();

    // 8 hex chars = 4 digest bytes.
    let suffix = hex::encode(&digest[..NAME_TAG_HEX_LEN / 2]);
    format!("{}{}{}", name, NAME_DELIMITER, suffix)
}

/// Recover the original field name from its obfuscated form.
///
/// # Errors
/// - `CryptoError::MalformedName` if there is no delimiter, the suffix
///   is not exactly 8 lowercase-hex characters, or the remaining name is
///   empty. A malformed key is a field-level failure for the codec.
pub fn recover_name(obfuscated: &str) -> Result<&str, CryptoError> {
    let malformed = || CryptoError::MalformedName {
        name: obfuscated.to_string(),
    };

    let (name, suffix) = obfuscated.rsplit_once(NAME_DELIMITER).ok_or_else(malformed)?;

    if name.is_empty()
        || suffix.len() != NAME_TAG_HEX_LEN
        || !suffix.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
    {
        return Err(malformed());
    }

    Ok(name)
}
