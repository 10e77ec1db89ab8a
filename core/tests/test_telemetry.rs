#[cfg(test)]
mod tests {
    use envelope_core::crypto::compute_tag;
    use envelope_core::envelope::NoiseCodec;
    use envelope_core::telemetry::CodecCounters;
    use serde_json::json;

    #[test]
    fn test_encode_counts_fields() {
        let codec = NoiseCodec::new("k").unwrap();
        let mut counters = CodecCounters::default();
        codec
            .encode_counted(&json!({ "a": 1, "b": 2, "c": 3 }), &mut counters)
            .unwrap();

        assert_eq!(counters.envelopes_encoded, 1);
        assert_eq!(counters.fields_encrypted, 3);
        assert_eq!(counters.envelopes_decoded, 0);
    }

    #[test]
    fn test_decode_counts_recovered_and_failed_fields() {
        let codec = NoiseCodec::new("k").unwrap();
        let mut envelope = codec.encode(&json!({ "a": 1, "b": 2 })).unwrap();

        // Break one field and re-tag so the failure is per-field.
        let key = envelope.fields.keys().next().unwrap().clone();
        envelope.fields[&key] = json!("AAAA");
        envelope.tag = compute_tag(b"k", &envelope.canonical_fields().unwrap());

        let mut counters = CodecCounters::default();
        codec.decode_counted(&envelope.to_value(), &mut counters).unwrap();

        assert_eq!(counters.envelopes_decoded, 1);
        assert_eq!(counters.fields_recovered, 1);
        assert_eq!(counters.field_failures, 1);
        assert_eq!(counters.integrity_failures, 0);
    }

    #[test]
    fn test_integrity_rejection_is_counted() {
        let codec = NoiseCodec::new("k").unwrap();
        let envelope = codec.encode(&json!({ "a": 1 })).unwrap();

        let mut counters = CodecCounters::default();
        let other = NoiseCodec::new("wrong").unwrap();
        assert!(other.decode_counted(&envelope.to_value(), &mut counters).is_err());

        assert_eq!(counters.integrity_failures, 1);
        assert_eq!(counters.envelopes_decoded, 0);
        assert_eq!(counters.fields_recovered, 0);
    }

    #[test]
    fn test_merge_aggregates_worker_counters() {
        let mut total = CodecCounters::default();
        let worker_a = CodecCounters {
            envelopes_encoded: 2,
            fields_encrypted: 5,
            ..Default::default()
        };
        let worker_b = CodecCounters {
            envelopes_decoded: 3,
            fields_recovered: 7,
            field_failures: 1,
            ..Default::default()
        };
        total.merge(&worker_a);
        total.merge(&worker_b);

        assert_eq!(total.envelopes_encoded, 2);
        assert_eq!(total.envelopes_decoded, 3);
        assert_eq!(total.fields_encrypted, 5);
        assert_eq!(total.fields_recovered, 7);
        assert_eq!(total.field_failures, 1);
    }

    #[test]
    fn test_counters_serialize_for_external_sinks() {
        let counters = CodecCounters {
            envelopes_encoded: 1,
            fields_encrypted: 2,
            ..Default::default()
        };
        let snapshot = serde_json::to_value(&counters).unwrap();
        assert_eq!(snapshot["envelopes_encoded"], 1);
        assert_eq!(snapshot["fields_encrypted"], 2);
    }
}
