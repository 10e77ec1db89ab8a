/// Protocol version carried in every envelope.
/// A string literal (not a number) so future versions can tag format
/// variants ("1.1", "2.0-aead") without widening the wire type.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Salt length in bytes. Random per envelope, input to key derivation.
pub const SALT_LEN: usize = 16;

/// IV length in bytes. Random per envelope, shared by every field cipher.
pub const IV_LEN: usize = 16;

/// Derived symmetric key length (256-bit AES).
pub const KEY_LEN_32: usize = 32;

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// Protocol constant: NOT caller-configurable and NOT carried in the
/// envelope. Encoder and decoder must agree out of band; changing it is
/// a protocol version bump.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Number of lowercase-hex characters appended to an obfuscated name.
pub const NAME_TAG_HEX_LEN: usize = 8;

/// Delimiter between an original field name and its hash suffix.
pub const NAME_DELIMITER: char = '_';

/// Required top-level envelope keys, in canonical wire order.
pub const ENVELOPE_KEYS: &[&str] = &["version", "timestamp", "salt", "iv", "fields", "tag"];
