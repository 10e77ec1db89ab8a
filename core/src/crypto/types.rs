//! crypto/types.rs
//! Stable primitive sizes and the crypto-layer error type.

use std::fmt;

pub use crate::constants::{IV_LEN, KEY_LEN_32, SALT_LEN};

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// IV length mismatch (must be 16 bytes for AES-CBC).
    InvalidIvLen { expected: usize, actual: usize },

    /// Salt length mismatch or all-zero salt.
    InvalidSalt(String),

    /// Ciphertext could not be decrypted (bad padding: wrong key, wrong
    /// IV, or corruption — CBC cannot tell these apart).
    DecryptFailed,

    /// Decrypted bytes are not valid UTF-8 or not parseable JSON.
    PlaintextFormat(String),

    /// Obfuscated name carries no valid hash suffix.
    MalformedName { name: String },

    /// General derivation or runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidIvLen { expected, actual } =>
                write!(f, "invalid IV length: expected={}, actual={}", expected, actual),
            InvalidSalt(msg) =>
                write!(f, "invalid salt: {}", msg),
            DecryptFailed =>
                write!(f, "decryption failed (wrong key/IV or corrupted ciphertext)"),
            PlaintextFormat(msg) =>
                write!(f, "recovered plaintext is not valid: {}", msg),
            MalformedName { name } =>
                write!(f, "obfuscated name has no valid suffix: {:?}", name),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
