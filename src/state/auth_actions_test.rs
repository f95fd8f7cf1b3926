use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use crate::net::auth_mock::{MOCK_EMAIL, MOCK_PASSWORD};
use crate::net::types::Session;
use crate::state::session::SessionState;

use super::*;

#[derive(Clone, Default)]
struct TestSession(Rc<RefCell<SessionState>>);

impl SessionSink for TestSession {
    fn set_loading(&self, loading: bool) {
        self.0.borrow_mut().loading = loading;
    }

    fn replace_session(&self, session: Option<Session>) {
        self.0.borrow_mut().replace(session);
    }
}

#[derive(Clone, Default)]
struct TestEffects {
    toasts: Rc<RefCell<Vec<(ToastKind, String, String)>>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl AuthEffects for TestEffects {
    fn notify(&self, kind: ToastKind, title: &str, body: &str) {
        self.toasts.borrow_mut().push((kind, title.to_owned(), body.to_owned()));
    }

    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_owned());
    }
}

fn mock_dispatcher() -> (AuthDispatcher<TestSession, TestEffects>, TestSession, TestEffects) {
    let session = TestSession::default();
    let effects = TestEffects::default();
    let dispatcher = AuthDispatcher::new(
        Arc::new(AuthClient::from_config(None)),
        session.clone(),
        effects.clone(),
    );
    (dispatcher, session, effects)
}

// =============================================================
// Sign-in
// =============================================================

#[test]
fn sign_in_with_mock_credentials_navigates_to_admin() {
    let (dispatcher, session, effects) = mock_dispatcher();

    block_on(dispatcher.sign_in(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();

    let state = session.0.borrow();
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(effects.navigations.borrow().as_slice(), ["/admin"]);
    let toasts = effects.toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, ToastKind::Success);
    assert_eq!(toasts[0].1, "Login successful");
}

#[test]
fn sign_in_failure_is_toasted_and_propagated() {
    let (dispatcher, session, effects) = mock_dispatcher();

    let error = block_on(dispatcher.sign_in(MOCK_EMAIL, "wrong")).unwrap_err();
    assert_eq!(error.to_string(), "Invalid login credentials");

    let state = session.0.borrow();
    assert!(!state.is_authenticated());
    assert!(!state.loading, "loading must be cleared on the failure path");
    assert!(effects.navigations.borrow().is_empty());
    let toasts = effects.toasts.borrow();
    assert_eq!(toasts[0].0, ToastKind::Error);
    assert_eq!(toasts[0].1, "Login failed");
    assert_eq!(toasts[0].2, "Invalid login credentials");
}

#[test]
fn loading_is_set_strictly_during_the_request() {
    let (dispatcher, session, _effects) = mock_dispatcher();
    assert!(!session.0.borrow().loading);

    block_on(async {
        let operation = dispatcher.sign_in(MOCK_EMAIL, MOCK_PASSWORD);
        let observe = async {
            assert!(session.0.borrow().loading, "loading must be set while the request is in flight");
        };
        let (result, ()) = futures::join!(operation, observe);
        result.unwrap();
    });

    assert!(!session.0.borrow().loading);
}

#[test]
fn overlapping_operations_are_rejected() {
    let (dispatcher, session, _effects) = mock_dispatcher();

    let (first, second) = block_on(async {
        futures::join!(
            dispatcher.sign_in(MOCK_EMAIL, MOCK_PASSWORD),
            dispatcher.sign_in(MOCK_EMAIL, MOCK_PASSWORD),
        )
    });

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err(), AuthError::InFlight);
    assert!(!session.0.borrow().loading, "the rejected call must not clobber the flag");
    assert!(session.0.borrow().is_authenticated());
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn sign_up_returns_to_login_pending_confirmation() {
    let (dispatcher, session, effects) = mock_dispatcher();

    block_on(dispatcher.sign_up("new@example.com", "secret1", Some("https://app.example.co/login"))).unwrap();

    assert!(!session.0.borrow().loading);
    assert!(!session.0.borrow().is_authenticated(), "sign-up does not establish a session");
    assert_eq!(effects.navigations.borrow().as_slice(), ["/login"]);
    let toasts = effects.toasts.borrow();
    assert_eq!(toasts[0].1, "Sign up successful");
    assert_eq!(toasts[0].2, "Please check your email to confirm your account");
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn sign_out_clears_the_session_and_returns_to_login() {
    let (dispatcher, session, effects) = mock_dispatcher();
    block_on(dispatcher.sign_in(MOCK_EMAIL, MOCK_PASSWORD)).unwrap();

    block_on(dispatcher.sign_out());

    let state = session.0.borrow();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(effects.navigations.borrow().last().map(String::as_str), Some("/login"));
}
