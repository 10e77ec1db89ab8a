#[cfg(test)]
mod tests {
    use envelope_core::crypto::{compute_tag, verify_tag};

    const FIELDS: &[u8] = br#"{"username_0ab3f2c1":"b64=","roles_9cc0d211":"b64="}"#;

    #[test]
    fn test_tag_is_hex_sha256_sized() {
        let tag = compute_tag(b"k", FIELDS);
        assert_eq!(tag.len(), 64); // 32 bytes hex-encoded
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tag_deterministic() {
        assert_eq!(compute_tag(b"k", FIELDS), compute_tag(b"k", FIELDS));
    }

    #[test]
    fn test_tag_depends_on_secret() {
        assert_ne!(compute_tag(b"k1", FIELDS), compute_tag(b"k2", FIELDS));
    }

    #[test]
    fn test_tag_depends_on_canonical_bytes() {
        // Any byte reordering of the canonical serialization changes the
        // tag; insertion order is part of the contract.
        let reordered: &[u8] = br#"{"roles_9cc0d211":"b64=","username_0ab3f2c1":"b64="}"#;
        assert_ne!(compute_tag(b"k", FIELDS), compute_tag(b"k", reordered));
    }

    #[test]
    fn test_verify_accepts_matching_tag() {
        let tag = compute_tag(b"k", FIELDS);
        verify_tag(b"k", FIELDS, &tag).unwrap();
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let tag = compute_tag(b"k1", FIELDS);
        assert!(verify_tag(b"k2", FIELDS, &tag).is_err());
    }

    #[test]
    fn test_verify_rejects_mutated_tag() {
        let mut tag = compute_tag(b"k", FIELDS).into_bytes();
        tag[0] = if tag[0] == b'0' { b'1' } else { b'0' };
        let tag = String::from_utf8(tag).unwrap();
        assert!(verify_tag(b"k", FIELDS, &tag).is_err());
    }

    #[test]
    fn test_verify_rejects_non_hex_and_short_tags() {
        assert!(verify_tag(b"k", FIELDS, "not-hex!").is_err());
        assert!(verify_tag(b"k", FIELDS, "abcd").is_err());
        assert!(verify_tag(b"k", FIELDS, "").is_err());
    }
}
