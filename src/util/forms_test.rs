use super::*;

#[test]
fn validate_email_accepts_and_trims_plausible_addresses() {
    assert_eq!(validate_email("  user@example.com  "), Ok("user@example.com".to_owned()));
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    assert!(validate_email("").is_err());
    assert!(validate_email("plainaddress").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("user@").is_err());
    assert!(validate_email("user@nodot").is_err());
    assert!(validate_email("user name@example.com").is_err());
}

#[test]
fn validate_password_enforces_minimum_length() {
    assert!(validate_password("12345").is_err());
    assert!(validate_password("123456").is_ok());
}

#[test]
fn validate_password_confirmation_requires_a_match() {
    assert!(validate_password_confirmation("secret1", "secret1").is_ok());
    assert_eq!(validate_password_confirmation("secret1", "secret2"), Err("Passwords don't match"));
    assert_eq!(validate_password_confirmation("secret1", "123"), Err("Please confirm your password"));
}

#[test]
fn validate_min_len_trims_before_measuring() {
    assert_eq!(validate_min_len("  Acme  ", 2, "too short"), Ok("Acme".to_owned()));
    assert_eq!(validate_min_len(" a ", 2, "too short"), Err("too short"));
}

#[test]
fn validate_optional_url_accepts_empty_and_http_schemes() {
    assert_eq!(validate_optional_url(""), Ok(None));
    assert_eq!(validate_optional_url("https://acme.example.co"), Ok(Some("https://acme.example.co".to_owned())));
    assert!(validate_optional_url("acme.example.co").is_err());
}

#[test]
fn validate_optional_email_accepts_empty() {
    assert_eq!(validate_optional_email("  "), Ok(None));
    assert!(validate_optional_email("nope").is_err());
    assert_eq!(validate_optional_email("a@b.co"), Ok(Some("a@b.co".to_owned())));
}
