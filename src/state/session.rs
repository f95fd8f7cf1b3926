//! Session state holder: single source of truth for "who is logged in."
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the header, and the documents flow all read this model.
//! It is fed from two places only: the one startup session lookup and the
//! collaborator's auth-change notification stream. `is_authenticated` is
//! always derived from the session, never stored, so the two cannot
//! diverge.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::auth::{AuthChange, AuthClient};
use crate::net::types::{Session, User};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Active session, if any. Replaced wholesale, never mutated in place.
    pub session: Option<Session>,
    /// True while the startup lookup or an auth operation is in flight.
    pub loading: bool,
}

impl SessionState {
    /// State at application start, before the session lookup resolves.
    #[must_use]
    pub fn new_loading() -> Self {
        Self { session: None, loading: true }
    }

    /// The authenticated identity, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Derived from the session on every read.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Apply the startup lookup result.
    ///
    /// Clears `loading` on every path; a failed lookup is applied as
    /// `finish_lookup(None)` so the holder can never hang in a loading
    /// state.
    pub fn finish_lookup(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    /// Apply one collaborator notification atomically.
    pub fn apply_change(&mut self, change: AuthChange) {
        match change {
            AuthChange::SignedIn(session) => self.session = Some(session),
            AuthChange::SignedOut => self.session = None,
        }
        self.loading = false;
    }

    /// Replace the session wholesale.
    pub fn replace(&mut self, session: Option<Session>) {
        self.session = session;
    }
}

/// Write access to the session state, used by the auth dispatcher.
pub trait SessionSink {
    fn set_loading(&self, loading: bool);
    fn replace_session(&self, session: Option<Session>);
}

impl SessionSink for RwSignal<SessionState> {
    fn set_loading(&self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    fn replace_session(&self, session: Option<Session>) {
        self.update(|s| s.replace(session));
    }
}

/// Create the session signal, run the startup lookup, subscribe to the
/// auth-change stream, and provide the signal as context.
///
/// The subscription is torn down when the owning scope is disposed, which
/// ends the pump task by closing its stream.
pub fn provide_session(client: Arc<AuthClient>) -> RwSignal<SessionState> {
    let state = RwSignal::new(SessionState::new_loading());
    let (changes, handle) = client.subscribe().split();

    #[cfg(feature = "csr")]
    {
        use futures::StreamExt;

        let lookup = client.clone();
        leptos::task::spawn_local(async move {
            match lookup.get_session().await {
                Ok(session) => state.update(|s| s.finish_lookup(session)),
                Err(error) => {
                    log::error!("session lookup failed: {error}");
                    state.update(|s| s.finish_lookup(None));
                }
            }
        });

        let mut changes = changes;
        leptos::task::spawn_local(async move {
            while let Some(change) = changes.next().await {
                state.update(|s| s.apply_change(change));
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(changes);
        drop(client);
    }

    on_cleanup(move || handle.unsubscribe());
    provide_context(state);
    state
}
