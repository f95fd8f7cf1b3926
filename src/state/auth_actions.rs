//! Auth action dispatcher: sign-in, sign-up, and sign-out wrappers.
//!
//! DESIGN
//! ======
//! Every operation follows the same envelope: mark loading, issue the
//! collaborator request, surface the outcome as a toast plus navigation,
//! and clear loading on every path. Operations are serialized by a single
//! in-flight guard: a second call while one is pending is rejected with
//! [`AuthError::InFlight`] instead of letting two completions race on the
//! shared loading flag.

#[cfg(test)]
#[path = "auth_actions_test.rs"]
mod auth_actions_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::auth::AuthClient;
use crate::net::error::AuthError;

use super::session::SessionSink;
use super::toast::ToastKind;

/// Side effects an auth operation may trigger.
pub trait AuthEffects {
    fn notify(&self, kind: ToastKind, title: &str, body: &str);
    fn navigate(&self, path: &str);
}

/// Dispatches auth operations against the collaborator and applies their
/// outcomes to the session state.
pub struct AuthDispatcher<S, E> {
    client: Arc<AuthClient>,
    session: S,
    effects: E,
    in_flight: AtomicBool,
}

impl<S: SessionSink, E: AuthEffects> AuthDispatcher<S, E> {
    pub fn new(client: Arc<AuthClient>, session: S, effects: E) -> Self {
        Self {
            client,
            session,
            effects,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The collaborator client backing this dispatcher.
    #[must_use]
    pub fn client(&self) -> &Arc<AuthClient> {
        &self.client
    }

    /// Sign in and navigate to the admin dashboard.
    ///
    /// # Errors
    ///
    /// Failures are toasted, then propagated so the login form can stay
    /// open with its state intact.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.begin()?;
        let outcome = match self.client.sign_in_with_password(email, password).await {
            Ok(session) => {
                self.session.replace_session(Some(session));
                self.effects.notify(
                    ToastKind::Success,
                    "Login successful",
                    "You have been logged in successfully",
                );
                self.effects.navigate("/admin");
                Ok(())
            }
            Err(error) => {
                log::error!("sign-in failed: {error}");
                self.effects.notify(ToastKind::Error, "Login failed", &error.to_string());
                Err(error)
            }
        };
        self.finish();
        outcome
    }

    /// Register an account and return to the login screen to await email
    /// confirmation.
    ///
    /// # Errors
    ///
    /// Same propagation contract as [`AuthDispatcher::sign_in`].
    pub async fn sign_up(&self, email: &str, password: &str, redirect_to: Option<&str>) -> Result<(), AuthError> {
        self.begin()?;
        let outcome = match self.client.sign_up(email, password, redirect_to).await {
            Ok(()) => {
                self.effects.notify(
                    ToastKind::Success,
                    "Sign up successful",
                    "Please check your email to confirm your account",
                );
                self.effects.navigate("/login");
                Ok(())
            }
            Err(error) => {
                log::error!("sign-up failed: {error}");
                self.effects.notify(ToastKind::Error, "Sign up failed", &error.to_string());
                Err(error)
            }
        };
        self.finish();
        outcome
    }

    /// Sign out, best effort: failures are surfaced and logged but never
    /// propagated, since the user has no recovery action.
    pub async fn sign_out(&self) {
        if self.begin().is_err() {
            return;
        }
        match self.client.sign_out().await {
            Ok(()) => {
                self.session.replace_session(None);
                self.effects.navigate("/login");
            }
            Err(error) => {
                log::error!("sign-out failed: {error}");
                self.effects.notify(ToastKind::Error, "Sign out failed", &error.to_string());
            }
        }
        self.finish();
    }

    fn begin(&self) -> Result<(), AuthError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            log::warn!("auth operation rejected: another request is already in progress");
            return Err(AuthError::InFlight);
        }
        self.session.set_loading(true);
        Ok(())
    }

    fn finish(&self) {
        self.session.set_loading(false);
        self.in_flight.store(false, Ordering::SeqCst);
    }
}
