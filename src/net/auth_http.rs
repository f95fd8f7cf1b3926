//! HTTP auth backend speaking the managed service's REST surface.
//!
//! Browser-side (`csr`): real requests via `gloo-net`, with the session
//! bundle persisted to localStorage so the startup lookup can restore it.
//! Native builds: stubs returning [`AuthError::Unsupported`] so logic
//! modules compile and test without a browser.

#[cfg(test)]
#[path = "auth_http_test.rs"]
mod auth_http_test;

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

use crate::config::ServiceConfig;

use super::error::AuthError;
use super::types::Session;
#[cfg(any(test, feature = "csr"))]
use super::types::User;

/// localStorage key holding the persisted session bundle.
pub const SESSION_KEY: &str = "ecoverify.auth.session";

/// HTTP auth backend.
pub struct HttpAuth {
    config: ServiceConfig,
}

#[cfg(any(test, feature = "csr"))]
fn token_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "csr"))]
fn signup_endpoint(base: &str, redirect_to: Option<&str>) -> String {
    match redirect_to {
        Some(target) => format!("{base}/auth/v1/signup?redirect_to={target}"),
        None => format!("{base}/auth/v1/signup"),
    }
}

#[cfg(any(test, feature = "csr"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

/// Extract a user-presentable message from a service error body.
#[cfg(any(test, feature = "csr"))]
fn service_error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error_description: Option<String>,
        msg: Option<String>,
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed
            .error_description
            .or(parsed.msg)
            .or(parsed.message)
            .or(parsed.error)
        {
            return message;
        }
    }
    format!("request failed with status {status}")
}

/// Token grant returned by the password endpoint.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

#[cfg(any(test, feature = "csr"))]
impl TokenGrant {
    fn into_session(self, now_secs: i64) -> Session {
        let expires_at = self.expires_at.or_else(|| self.expires_in.map(|ttl| now_secs + ttl));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

impl HttpAuth {
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Restore the persisted session, dropping it when already expired.
    ///
    /// # Errors
    ///
    /// Never fails today; typed to match the collaborator contract.
    #[allow(clippy::unused_async)]
    pub async fn restore_session(&self) -> Result<Option<Session>, AuthError> {
        #[cfg(feature = "csr")]
        {
            let Some(session) = crate::util::persist::load_json::<Session>(SESSION_KEY) else {
                return Ok(None);
            };
            if session.is_expired(crate::util::time::now_secs()) {
                // TODO: refresh expired sessions with the refresh token instead of dropping them.
                crate::util::persist::remove_item(SESSION_KEY);
                return Ok(None);
            }
            Ok(Some(session))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    /// Exchange credentials for a session and persist the bundle.
    ///
    /// # Errors
    ///
    /// [`AuthError::Service`] when the service rejects the credentials,
    /// [`AuthError::Transport`] when the request itself fails.
    #[allow(clippy::unused_async)]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = gloo_net::http::Request::post(&token_endpoint(&self.config.url))
                .header("apikey", &self.config.key)
                .json(&payload)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(AuthError::Service(service_error_message(resp.status(), &body)));
            }
            let grant: TokenGrant = resp.json().await.map_err(|e| AuthError::Transport(e.to_string()))?;
            let session = grant.into_session(crate::util::time::now_secs());
            crate::util::persist::save_json(SESSION_KEY, &session);
            Ok(session)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(AuthError::Unsupported)
        }
    }

    /// Register a new account; the confirmation email links to `redirect_to`.
    ///
    /// # Errors
    ///
    /// Same contract as [`HttpAuth::sign_in`].
    #[allow(clippy::unused_async)]
    pub async fn sign_up(&self, email: &str, password: &str, redirect_to: Option<&str>) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = gloo_net::http::Request::post(&signup_endpoint(&self.config.url, redirect_to))
                .header("apikey", &self.config.key)
                .json(&payload)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(AuthError::Service(service_error_message(resp.status(), &body)));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password, redirect_to);
            Err(AuthError::Unsupported)
        }
    }

    /// Revoke the session server-side and discard the persisted bundle.
    ///
    /// # Errors
    ///
    /// Same contract as [`HttpAuth::sign_in`]; callers treat failures as
    /// best-effort.
    #[allow(clippy::unused_async)]
    pub async fn sign_out(&self, access_token: Option<&str>) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::post(&logout_endpoint(&self.config.url))
                .header("apikey", &self.config.key);
            if let Some(token) = access_token {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = request
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(AuthError::Service(service_error_message(resp.status(), &body)));
            }
            crate::util::persist::remove_item(SESSION_KEY);
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = access_token;
            Err(AuthError::Unsupported)
        }
    }
}
