//! crypto/mod.rs
//! Public module export for the envelope crypto primitives.
//!
//! Industry notes:
//! - Key derivation, value encryption, name obfuscation, and integrity
//!   tagging are separate leaf modules so each can be tested and audited
//!   in isolation.
//! - The long-term secret never touches the cipher directly: values are
//!   encrypted under a PBKDF2-derived per-envelope key, while the tag is
//!   keyed by the secret itself. Mixing the two up breaks wrong-key
//!   rejection semantics.

pub mod types;
pub mod kdf;
pub mod cipher;
pub mod obfuscate;
pub mod tag;

pub use types::*;
pub use kdf::*;
pub use cipher::*;
pub use obfuscate::*;
pub use tag::*;
