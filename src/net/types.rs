//! Wire DTOs for the managed auth/storage service.
//!
//! DESIGN
//! ======
//! These types mirror the service's response shapes so serde can map
//! payloads directly; everything the application derives from them
//! (display names, reconstructed paths) lives in `state`, not here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity record embedded in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier assigned by the service.
    pub id: String,
    /// Account email, if the service exposed one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Opaque token bundle proving an authenticated user.
///
/// Owned by the session state holder and replaced wholesale; consumers
/// never mutate a session in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent with authenticated storage requests.
    pub access_token: String,
    /// Token used to mint a replacement session, if issued.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds after which the access token is no longer valid.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// The authenticated identity.
    pub user: User,
}

impl Session {
    /// Whether the session is already expired at `now_secs`.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}

/// One object as returned by the storage list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageEntry {
    /// Object identifier; absent for folder placeholders.
    #[serde(default)]
    pub id: Option<String>,
    /// Stored object name within the listed prefix.
    pub name: String,
    /// Creation timestamp as reported by the service.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp as reported by the service.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Object metadata; absent for folder placeholders.
    #[serde(default)]
    pub metadata: Option<ObjectMetadata>,
}

/// Metadata block attached to a stored object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// Object size in bytes.
    #[serde(default)]
    pub size: u64,
}
