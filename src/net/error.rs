//! Error types for collaborator calls.
//!
//! ERROR HANDLING
//! ==============
//! Collaborator failures carry the service's human-readable message so
//! pages can surface it in a toast verbatim. Transport problems (fetch
//! failures, malformed bodies) are separated so logs can tell a rejected
//! request from a network fault.

use thiserror::Error;

/// Error returned by [`crate::net::auth::AuthClient`] operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The service rejected the request; the message is user-presentable.
    #[error("{0}")]
    Service(String),
    /// The request never produced a service response.
    #[error("network error: {0}")]
    Transport(String),
    /// Another auth operation is still in flight.
    #[error("another authentication request is already in progress")]
    InFlight,
    /// The operation needs a browser environment.
    #[error("authentication is only available in the browser")]
    Unsupported,
}

/// Error returned by [`crate::net::storage::StorageClient`] operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The service rejected the request; the message is user-presentable.
    #[error("{0}")]
    Service(String),
    /// The request never produced a service response.
    #[error("network error: {0}")]
    Transport(String),
    /// The operation needs a browser environment.
    #[error("storage is only available in the browser")]
    Unsupported,
}
