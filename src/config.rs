//! Build-time service configuration.
//!
//! DESIGN
//! ======
//! The managed-service endpoint and public key are baked in at compile time
//! (the SPA has no server of its own to ask at runtime). When either value
//! is absent the application falls back to the documented in-memory mock
//! collaborators, selected once at startup rather than checked per call.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage bucket holding per-user verification documents.
pub const DOCUMENTS_BUCKET: &str = "verification_documents";

/// Maximum accepted upload size in megabytes.
pub const MAX_UPLOAD_MB: u64 = 50;

/// Maximum accepted upload size in bytes.
#[must_use]
pub const fn max_upload_bytes() -> u64 {
    MAX_UPLOAD_MB * 1024 * 1024
}

/// Connection details for the managed auth/storage service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the service project, without a trailing slash.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub key: String,
}

/// Resolve the service configuration from build-time environment values.
///
/// Returns `None` unless both `ECOVERIFY_SERVICE_URL` and
/// `ECOVERIFY_SERVICE_KEY` were set to non-empty values, in which case the
/// caller should run against the mock collaborators.
#[must_use]
pub fn resolve() -> Option<ServiceConfig> {
    from_values(option_env!("ECOVERIFY_SERVICE_URL"), option_env!("ECOVERIFY_SERVICE_KEY"))
}

fn from_values(url: Option<&str>, key: Option<&str>) -> Option<ServiceConfig> {
    let url = url.map(str::trim).filter(|v| !v.is_empty())?;
    let key = key.map(str::trim).filter(|v| !v.is_empty())?;
    Some(ServiceConfig {
        url: url.trim_end_matches('/').to_owned(),
        key: key.to_owned(),
    })
}
