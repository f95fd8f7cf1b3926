use super::*;

#[test]
fn token_endpoint_targets_password_grant() {
    assert_eq!(
        token_endpoint("https://x.example.co"),
        "https://x.example.co/auth/v1/token?grant_type=password"
    );
}

#[test]
fn signup_endpoint_appends_redirect_when_present() {
    assert_eq!(
        signup_endpoint("https://x.example.co", Some("https://app.example.co/login")),
        "https://x.example.co/auth/v1/signup?redirect_to=https://app.example.co/login"
    );
    assert_eq!(signup_endpoint("https://x.example.co", None), "https://x.example.co/auth/v1/signup");
}

#[test]
fn logout_endpoint_formats_expected_path() {
    assert_eq!(logout_endpoint("https://x.example.co"), "https://x.example.co/auth/v1/logout");
}

#[test]
fn service_error_message_prefers_error_description() {
    let body = r#"{"error_description":"Invalid login credentials","msg":"other"}"#;
    assert_eq!(service_error_message(400, body), "Invalid login credentials");
}

#[test]
fn service_error_message_falls_back_through_known_keys() {
    assert_eq!(service_error_message(422, r#"{"msg":"Signup requires a valid password"}"#), "Signup requires a valid password");
    assert_eq!(service_error_message(500, r#"{"message":"internal"}"#), "internal");
}

#[test]
fn service_error_message_defaults_to_status() {
    assert_eq!(service_error_message(502, "not json"), "request failed with status 502");
    assert_eq!(service_error_message(400, "{}"), "request failed with status 400");
}

#[test]
fn token_grant_derives_expiry_from_ttl() {
    let grant: TokenGrant = serde_json::from_str(
        r#"{"access_token":"tok","refresh_token":"ref","expires_in":3600,"user":{"id":"u1","email":"a@b.co"}}"#,
    )
    .unwrap();
    let session = grant.into_session(1_000);
    assert_eq!(session.expires_at, Some(4_600));
    assert_eq!(session.access_token, "tok");
    assert_eq!(session.user.id, "u1");
}

#[test]
fn token_grant_prefers_absolute_expiry() {
    let grant: TokenGrant = serde_json::from_str(
        r#"{"access_token":"tok","expires_in":3600,"expires_at":9000,"user":{"id":"u1"}}"#,
    )
    .unwrap();
    assert_eq!(grant.into_session(1_000).expires_at, Some(9_000));
}

#[test]
fn restore_session_is_none_in_native_builds() {
    let http = HttpAuth::new(crate::config::ServiceConfig {
        url: "https://x.example.co".to_owned(),
        key: "anon".to_owned(),
    });
    let restored = futures::executor::block_on(http.restore_session()).unwrap();
    assert!(restored.is_none());
}
