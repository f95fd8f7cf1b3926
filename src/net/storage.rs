//! Object-storage collaborator client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the auth client's shape: one client, two backends chosen at
//! startup. Operations are plain request/response calls with no retries;
//! callers log and toast failures.

use std::sync::Arc;

use crate::config::ServiceConfig;

use super::auth::AuthClient;
use super::error::StorageError;
use super::storage_http::HttpStorage;
use super::storage_mock::MockStorage;
use super::types::StorageEntry;

/// A file handed to the upload operation.
///
/// Carries the metadata needed for validation and path construction on
/// every target; the browser `File` handle is only present under `csr`.
#[derive(Clone, Debug)]
pub struct UploadSource {
    /// Original file name as picked by the user.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// Browser file handle backing the request body.
    #[cfg(feature = "csr")]
    pub file: Option<web_sys::File>,
}

impl UploadSource {
    /// Build a source from bare metadata (native tests, mock backend).
    #[must_use]
    pub fn from_parts(name: &str, size: u64) -> Self {
        Self {
            name: name.to_owned(),
            size,
            #[cfg(feature = "csr")]
            file: None,
        }
    }

    /// Build a source from a picked browser file.
    #[cfg(feature = "csr")]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            file: Some(file),
        }
    }
}

/// Client for the managed object-storage service.
pub struct StorageClient {
    backend: StorageBackend,
}

enum StorageBackend {
    Http(HttpStorage),
    Mock(MockStorage),
}

impl StorageClient {
    /// Build the client, matching the auth client's backend selection.
    #[must_use]
    pub fn from_config(config: Option<ServiceConfig>, auth: Arc<AuthClient>) -> Self {
        let backend = match config {
            Some(config) => StorageBackend::Http(HttpStorage::new(config, auth)),
            None => StorageBackend::Mock(MockStorage::new()),
        };
        Self { backend }
    }

    /// Whether the client runs against the mock backend.
    #[must_use]
    pub fn is_mock(&self) -> bool {
        matches!(self.backend, StorageBackend::Mock(_))
    }

    /// Store an object at `path`. Never overwrites an existing object.
    ///
    /// # Errors
    ///
    /// Returns the service's rejection message or a transport error.
    pub async fn upload(&self, bucket: &str, path: &str, source: &UploadSource) -> Result<String, StorageError> {
        match &self.backend {
            StorageBackend::Http(http) => http.upload(bucket, path, source).await,
            StorageBackend::Mock(mock) => mock.upload(path, source).await,
        }
    }

    /// List objects under `prefix`, newest first.
    ///
    /// # Errors
    ///
    /// Returns the service's rejection message or a transport error.
    pub async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<StorageEntry>, StorageError> {
        match &self.backend {
            StorageBackend::Http(http) => http.list(bucket, prefix).await,
            StorageBackend::Mock(mock) => mock.list(prefix).await,
        }
    }

    /// Fetch an object's bytes.
    ///
    /// # Errors
    ///
    /// Returns the service's rejection message or a transport error.
    pub async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        match &self.backend {
            StorageBackend::Http(http) => http.download(bucket, path).await,
            StorageBackend::Mock(mock) => mock.download(path).await,
        }
    }

    /// Delete the listed objects.
    ///
    /// # Errors
    ///
    /// Returns the service's rejection message or a transport error.
    pub async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        match &self.backend {
            StorageBackend::Http(http) => http.remove(bucket, paths).await,
            StorageBackend::Mock(mock) => mock.remove(paths).await,
        }
    }
}
