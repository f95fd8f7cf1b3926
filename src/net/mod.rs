//! Collaborator clients for the managed auth and object-storage service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `storage` each expose one client with two interchangeable
//! backends: an HTTP backend speaking the service's REST surface and an
//! in-memory mock used when no service configuration is present. The
//! backend is chosen once at startup from [`crate::config::resolve`].

pub mod auth;
pub mod auth_http;
pub mod auth_mock;
pub mod error;
pub mod storage;
pub mod storage_http;
pub mod storage_mock;
pub mod types;
