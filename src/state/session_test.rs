use super::*;
use crate::net::types::{Session, User};

fn session_for(user_id: &str) -> Session {
    Session {
        access_token: "tok".to_owned(),
        refresh_token: None,
        expires_at: None,
        user: User { id: user_id.to_owned(), email: Some("a@b.co".to_owned()) },
    }
}

// =============================================================
// Defaults and derivation
// =============================================================

#[test]
fn default_is_signed_out_and_idle() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn new_loading_starts_in_lookup_state() {
    let state = SessionState::new_loading();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn is_authenticated_follows_the_session() {
    let mut state = SessionState::default();
    assert!(!state.is_authenticated());
    state.replace(Some(session_for("u1")));
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
    state.replace(None);
    assert!(!state.is_authenticated());
}

// =============================================================
// Startup lookup
// =============================================================

#[test]
fn finish_lookup_clears_loading_on_success() {
    let mut state = SessionState::new_loading();
    state.finish_lookup(Some(session_for("u1")));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn finish_lookup_clears_loading_when_no_session_exists() {
    let mut state = SessionState::new_loading();
    state.finish_lookup(None);
    assert!(!state.loading, "a failed or empty lookup must not leave loading set");
    assert!(!state.is_authenticated());
}

// =============================================================
// Change notifications
// =============================================================

#[test]
fn signed_in_change_replaces_session_and_clears_loading() {
    let mut state = SessionState::new_loading();
    state.apply_change(AuthChange::SignedIn(session_for("u1")));
    assert!(!state.loading);
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));

    state.apply_change(AuthChange::SignedIn(session_for("u2")));
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u2"));
}

#[test]
fn signed_out_change_drops_the_session() {
    let mut state = SessionState::default();
    state.replace(Some(session_for("u1")));
    state.apply_change(AuthChange::SignedOut);
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
