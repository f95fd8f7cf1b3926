use super::*;

#[test]
fn from_values_requires_both_entries() {
    assert!(from_values(None, None).is_none());
    assert!(from_values(Some("https://x.example.co"), None).is_none());
    assert!(from_values(None, Some("anon-key")).is_none());
}

#[test]
fn from_values_rejects_blank_entries() {
    assert!(from_values(Some("   "), Some("anon-key")).is_none());
    assert!(from_values(Some("https://x.example.co"), Some("")).is_none());
}

#[test]
fn from_values_trims_trailing_slash_on_url() {
    let config = from_values(Some("https://x.example.co/"), Some("anon-key")).unwrap();
    assert_eq!(config.url, "https://x.example.co");
    assert_eq!(config.key, "anon-key");
}

#[test]
fn max_upload_bytes_matches_mb_limit() {
    assert_eq!(max_upload_bytes(), 50 * 1024 * 1024);
}
