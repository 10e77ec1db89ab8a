//! envelope/mod.rs
//! Public module export for the noisy envelope codec.
//!
//! Industry notes:
//! - One envelope = one salt, one IV, one derived key, one tag. Fresh
//!   randomness per envelope; nothing is cached between calls.
//! - Decode is gated: structure, then integrity, then key derivation,
//!   then per-field decryption. Only the first three can fail the call;
//!   the fourth degrades per field.
//! - The codec is a value, not a module-level singleton: the secret is
//!   passed in explicitly at construction, once per logical key scope.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
