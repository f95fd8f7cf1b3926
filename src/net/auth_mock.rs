//! In-memory auth backend for development without service configuration.
//!
//! Accepts exactly one credential pair and simulates service latency so
//! loading states stay visible. Starts signed out; the session produced by
//! a mock sign-in lives only as long as the page.

#[cfg(test)]
#[path = "auth_mock_test.rs"]
mod auth_mock_test;

use super::error::AuthError;
use super::types::{Session, User};

/// Email accepted by the mock backend.
pub const MOCK_EMAIL: &str = "admin@example.com";
/// Password accepted by the mock backend.
pub const MOCK_PASSWORD: &str = "password";

const MOCK_USER_ID: &str = "1";
const INVALID_CREDENTIALS: &str = "Invalid login credentials";

#[cfg(feature = "csr")]
const LATENCY_MS: u32 = 500;

/// Mock auth backend.
#[derive(Debug, Default)]
pub struct MockAuth;

impl MockAuth {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// There is never a pre-existing mock session.
    ///
    /// # Errors
    ///
    /// Never fails; typed to match the HTTP backend.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        simulate_latency().await;
        Ok(None)
    }

    /// Accept the hardcoded credential pair, reject everything else.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Service`] with "Invalid login credentials" for
    /// any other pair.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        simulate_latency().await;
        if email == MOCK_EMAIL && password == MOCK_PASSWORD {
            Ok(mock_session())
        } else {
            Err(AuthError::Service(INVALID_CREDENTIALS.to_owned()))
        }
    }

    /// Pretend the registration was accepted.
    ///
    /// # Errors
    ///
    /// Never fails; typed to match the HTTP backend.
    pub async fn sign_up(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
        simulate_latency().await;
        Ok(())
    }

    /// Always succeeds.
    ///
    /// # Errors
    ///
    /// Never fails; typed to match the HTTP backend.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        simulate_latency().await;
        Ok(())
    }
}

fn mock_session() -> Session {
    Session {
        access_token: "mock-access-token".to_owned(),
        refresh_token: None,
        expires_at: None,
        user: User {
            id: MOCK_USER_ID.to_owned(),
            email: Some(MOCK_EMAIL.to_owned()),
        },
    }
}

/// Simulated request latency: a real timer in the browser, a bare yield in
/// native builds so tests can observe in-flight states without waiting.
async fn simulate_latency() {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(LATENCY_MS).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        yield_once().await;
    }
}

#[cfg(not(feature = "csr"))]
fn yield_once() -> YieldOnce {
    YieldOnce { yielded: false }
}

#[cfg(not(feature = "csr"))]
struct YieldOnce {
    yielded: bool,
}

#[cfg(not(feature = "csr"))]
impl core::future::Future for YieldOnce {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<()> {
        if self.yielded {
            core::task::Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            core::task::Poll::Pending
        }
    }
}
