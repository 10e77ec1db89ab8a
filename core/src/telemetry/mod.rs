//! telemetry/mod.rs
//! Codec observability: deterministic counters.
//!
//! Industry notes:
//! - Counters are plain mutable structs merged at the end of a batch;
//!   no locks inside the codec, no atomics, no metrics backend.
//! - Serde-serializable so callers can ship snapshots to whatever sink
//!   they already have.

pub mod counters;

pub use counters::*;
