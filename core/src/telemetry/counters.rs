//! telemetry/counters.rs
//! Mutable counters collected while encoding/decoding envelopes.
//!
//! Summary: Collects envelope and per-field outcome counts. Callers
//! that batch many envelopes keep one instance per worker and `merge`
//! at the end; no locks, no atomics.

use serde::{Deserialize, Serialize};

/// Deterministic counters collected during codec operation.
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodecCounters {
    pub envelopes_encoded: u64,
    pub envelopes_decoded: u64,
    pub fields_encrypted: u64,
    pub fields_recovered: u64,
    pub field_failures: u64,
    pub integrity_failures: u64,
}

impl CodecCounters {
    /// Record one fully assembled envelope.
    pub fn add_envelope_encoded(&mut self) {
        self.envelopes_encoded += 1;
    }

    /// Record one decode call that passed integrity verification.
    pub fn add_envelope_decoded(&mut self) {
        self.envelopes_decoded += 1;
    }

    /// Record one field encrypted on the encode path.
    pub fn add_field_encrypted(&mut self) {
        self.fields_encrypted += 1;
    }

    /// Record one field decrypted and parsed on the decode path.
    pub fn add_field_recovered(&mut self) {
        self.fields_recovered += 1;
    }

    /// Record one field that degraded to `null` on the decode path.
    pub fn add_field_failure(&mut self) {
        self.field_failures += 1;
    }

    /// Record one rejected envelope (tag mismatch).
    pub fn add_integrity_failure(&mut self) {
        self.integrity_failures += 1;
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.envelopes_encoded += other.envelopes_encoded;
        self.envelopes_decoded += other.envelopes_decoded;
        self.fields_encrypted += other.fields_encrypted;
        self.fields_recovered += other.fields_recovered;
        self.field_failures += other.field_failures;
        self.integrity_failures += other.integrity_failures;
    }
}
