use futures::executor::block_on;

use super::*;

#[test]
fn mock_starts_signed_out() {
    let mock = MockAuth::new();
    assert!(block_on(mock.get_session()).unwrap().is_none());
}

#[test]
fn mock_accepts_the_hardcoded_credentials() {
    let mock = MockAuth::new();
    let session = block_on(mock.sign_in(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();
    assert_eq!(session.user.id, "1");
    assert_eq!(session.user.email.as_deref(), Some(MOCK_EMAIL));
}

#[test]
fn mock_rejects_any_other_credentials() {
    let mock = MockAuth::new();
    let error = block_on(mock.sign_in(MOCK_EMAIL, "wrong")).unwrap_err();
    assert_eq!(error, AuthError::Service("Invalid login credentials".to_owned()));

    let error = block_on(mock.sign_in("someone@example.com", MOCK_PASSWORD)).unwrap_err();
    assert_eq!(error, AuthError::Service("Invalid login credentials".to_owned()));
}

#[test]
fn mock_sign_up_and_sign_out_succeed() {
    let mock = MockAuth::new();
    assert!(block_on(mock.sign_up("new@example.com", "secret1")).is_ok());
    assert!(block_on(mock.sign_out()).is_ok());
}
