//! envelope-core
//!
//! Pure Rust noisy-envelope codec: per-field encryption, field-name
//! obfuscation, and keyed integrity tagging over a JSON envelope.
//! No transport, no key management.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

// Protocol layers
pub mod crypto;
pub mod envelope;
pub mod telemetry;

pub use envelope::{decode, encode, CodecError, DecodeOutcome, Envelope, NoiseCodec};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::envelope::{CodecError, DecodeOutcome, DecodeReport, Envelope, NoiseCodec};
    pub use crate::telemetry::CodecCounters;
}
