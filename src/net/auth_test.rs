use futures::executor::block_on;

use crate::net::auth_mock::{MOCK_EMAIL, MOCK_PASSWORD};

use super::*;

fn mock_client() -> AuthClient {
    AuthClient::from_config(None)
}

#[test]
fn from_config_selects_mock_without_configuration() {
    assert!(mock_client().is_mock());
}

#[test]
fn from_config_selects_http_with_configuration() {
    let client = AuthClient::from_config(Some(ServiceConfig {
        url: "https://x.example.co".to_owned(),
        key: "anon".to_owned(),
    }));
    assert!(!client.is_mock());
}

#[test]
fn sign_in_caches_the_session_token() {
    let client = mock_client();
    assert!(client.access_token().is_none());
    block_on(client.sign_in_with_password(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();
    assert_eq!(client.access_token().as_deref(), Some("mock-access-token"));
}

#[test]
fn sign_in_emits_a_signed_in_change() {
    let client = mock_client();
    let (mut changes, _handle) = client.subscribe().split();

    let session = block_on(client.sign_in_with_password(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();
    match changes.try_next() {
        Ok(Some(AuthChange::SignedIn(emitted))) => assert_eq!(emitted, session),
        other => panic!("expected SignedIn change, got {other:?}"),
    }
}

#[test]
fn failed_sign_in_emits_nothing() {
    let client = mock_client();
    let (mut changes, _handle) = client.subscribe().split();

    assert!(block_on(client.sign_in_with_password(MOCK_EMAIL, "wrong")).is_err());
    assert!(changes.try_next().is_err(), "channel should be empty and open");
}

#[test]
fn sign_out_clears_the_token_and_emits_signed_out() {
    let client = mock_client();
    block_on(client.sign_in_with_password(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();
    let (mut changes, _handle) = client.subscribe().split();

    block_on(client.sign_out()).unwrap();
    assert!(client.access_token().is_none());
    assert!(matches!(changes.try_next(), Ok(Some(AuthChange::SignedOut))));
}

#[test]
fn unsubscribe_closes_the_change_stream() {
    let client = mock_client();
    let (mut changes, handle) = client.subscribe().split();

    handle.unsubscribe();
    assert!(matches!(changes.try_next(), Ok(None)), "stream should be terminated");

    // Emissions after teardown go nowhere instead of backing up.
    block_on(client.sign_in_with_password(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();
}

#[test]
fn resubscribing_replaces_the_previous_subscriber() {
    let client = mock_client();
    let (mut first, _first_handle) = client.subscribe().split();
    let (mut second, _second_handle) = client.subscribe().split();

    block_on(client.sign_in_with_password(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();
    assert!(matches!(first.try_next(), Ok(None)), "first stream should be closed");
    assert!(matches!(second.try_next(), Ok(Some(AuthChange::SignedIn(_)))));
}

#[test]
fn get_session_resets_the_cached_token() {
    let client = mock_client();
    block_on(client.sign_in_with_password(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();
    assert!(block_on(client.get_session()).unwrap().is_none());
    assert!(client.access_token().is_none());
}
