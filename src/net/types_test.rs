use super::*;

#[test]
fn session_without_expiry_never_expires() {
    let session = Session {
        access_token: "tok".to_owned(),
        refresh_token: None,
        expires_at: None,
        user: User { id: "u1".to_owned(), email: None },
    };
    assert!(!session.is_expired(i64::MAX));
}

#[test]
fn session_expires_at_boundary() {
    let session = Session {
        access_token: "tok".to_owned(),
        refresh_token: None,
        expires_at: Some(1_000),
        user: User { id: "u1".to_owned(), email: None },
    };
    assert!(!session.is_expired(999));
    assert!(session.is_expired(1_000));
    assert!(session.is_expired(1_001));
}

#[test]
fn storage_entry_deserializes_with_missing_optional_fields() {
    let entry: StorageEntry = serde_json::from_str(r#"{"name":"1716800000000_report.pdf"}"#).unwrap();
    assert_eq!(entry.name, "1716800000000_report.pdf");
    assert!(entry.id.is_none());
    assert!(entry.metadata.is_none());
}

#[test]
fn storage_entry_reads_metadata_size() {
    let raw = r#"{"id":"abc","name":"x.pdf","created_at":"2024-05-27T10:00:00.000Z","metadata":{"size":2048,"mimetype":"application/pdf"}}"#;
    let entry: StorageEntry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.metadata.unwrap().size, 2048);
}

#[test]
fn user_email_defaults_to_none() {
    let user: User = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
    assert!(user.email.is_none());
}
