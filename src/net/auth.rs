//! Auth collaborator client.
//!
//! SYSTEM CONTEXT
//! ==============
//! One client fronts two interchangeable backends (HTTP service or
//! in-memory mock) selected once at startup. Besides request/response
//! operations, the client owns the auth-change notification channel the
//! session state holder subscribes to: sign-in and sign-out emit change
//! events in the order they complete, and the single subscriber can drop
//! out cleanly via its unsubscribe handle.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

use crate::config::ServiceConfig;

use super::auth_http::HttpAuth;
use super::auth_mock::MockAuth;
use super::error::AuthError;
use super::types::Session;

/// A state-change notification emitted by the auth collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthChange {
    /// A session was established or replaced.
    SignedIn(Session),
    /// The session ended.
    SignedOut,
}

type EventSlot = Arc<Mutex<Option<UnboundedSender<AuthChange>>>>;

/// Client for the managed authentication service.
pub struct AuthClient {
    backend: AuthBackend,
    events: EventSlot,
    current: Mutex<Option<Session>>,
}

enum AuthBackend {
    Http(HttpAuth),
    Mock(MockAuth),
}

impl AuthClient {
    /// Build the client, choosing the HTTP backend when a service
    /// configuration is present and the mock backend otherwise.
    #[must_use]
    pub fn from_config(config: Option<ServiceConfig>) -> Self {
        let backend = match config {
            Some(config) => AuthBackend::Http(HttpAuth::new(config)),
            None => AuthBackend::Mock(MockAuth::new()),
        };
        Self {
            backend,
            events: Arc::new(Mutex::new(None)),
            current: Mutex::new(None),
        }
    }

    /// Whether the client runs against the mock backend.
    #[must_use]
    pub fn is_mock(&self) -> bool {
        matches!(self.backend, AuthBackend::Mock(_))
    }

    /// Bearer token of the current session, if one is held.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        lock(&self.current).as_ref().map(|s| s.access_token.clone())
    }

    /// Look up an existing session. Used once at application start.
    ///
    /// # Errors
    ///
    /// Returns the backend's error; callers log it and treat the state as
    /// unauthenticated rather than retrying.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let session = match &self.backend {
            AuthBackend::Http(http) => http.restore_session().await,
            AuthBackend::Mock(mock) => mock.get_session().await,
        }?;
        *lock(&self.current) = session.clone();
        Ok(session)
    }

    /// Exchange credentials for a session and emit [`AuthChange::SignedIn`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Service`] with the collaborator's message when
    /// the credentials are rejected.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = match &self.backend {
            AuthBackend::Http(http) => http.sign_in(email, password).await,
            AuthBackend::Mock(mock) => mock.sign_in(email, password).await,
        }?;
        *lock(&self.current) = Some(session.clone());
        self.emit(AuthChange::SignedIn(session.clone()));
        Ok(session)
    }

    /// Register a new account. Does not establish a session; the service
    /// sends a confirmation email pointing at `redirect_to`.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's rejection message.
    pub async fn sign_up(&self, email: &str, password: &str, redirect_to: Option<&str>) -> Result<(), AuthError> {
        match &self.backend {
            AuthBackend::Http(http) => http.sign_up(email, password, redirect_to).await,
            AuthBackend::Mock(mock) => mock.sign_up(email, password).await,
        }
    }

    /// End the current session and emit [`AuthChange::SignedOut`].
    ///
    /// # Errors
    ///
    /// Returns the backend's error; the local session is kept so callers
    /// can decide how to surface the failure.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let token = self.access_token();
        match &self.backend {
            AuthBackend::Http(http) => http.sign_out(token.as_deref()).await,
            AuthBackend::Mock(mock) => mock.sign_out().await,
        }?;
        lock(&self.current).take();
        self.emit(AuthChange::SignedOut);
        Ok(())
    }

    /// Subscribe to auth-change notifications.
    ///
    /// The channel carries one subscriber at a time; subscribing again
    /// closes the previous subscriber's stream.
    #[must_use]
    pub fn subscribe(&self) -> AuthSubscription {
        let (sender, receiver) = unbounded();
        *lock(&self.events) = Some(sender);
        AuthSubscription {
            changes: receiver,
            handle: UnsubscribeHandle { slot: Arc::downgrade(&self.events) },
        }
    }

    fn emit(&self, change: AuthChange) {
        if let Some(sender) = lock(&self.events).as_ref() {
            let _ = sender.unbounded_send(change);
        }
    }
}

/// Active subscription to the auth-change channel.
pub struct AuthSubscription {
    changes: UnboundedReceiver<AuthChange>,
    handle: UnsubscribeHandle,
}

impl AuthSubscription {
    /// Split into the change stream and the handle that ends it.
    #[must_use]
    pub fn split(self) -> (UnboundedReceiver<AuthChange>, UnsubscribeHandle) {
        (self.changes, self.handle)
    }
}

/// Ends a subscription: dropping the registered sender closes the
/// receiver's stream so pump tasks terminate.
pub struct UnsubscribeHandle {
    slot: Weak<Mutex<Option<UnboundedSender<AuthChange>>>>,
}

impl UnsubscribeHandle {
    pub fn unsubscribe(&self) {
        if let Some(slot) = self.slot.upgrade() {
            lock(&slot).take();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
