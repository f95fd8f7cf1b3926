//! HTTP storage backend speaking the managed service's REST surface.
//!
//! Uploads send the browser `File` as the request body; the service does
//! not report byte-level progress, which is why the upload UI simulates
//! it. Authenticated requests reuse the auth client's current token and
//! fall back to the public key.

#[cfg(test)]
#[path = "storage_http_test.rs"]
mod storage_http_test;

use std::sync::Arc;

use crate::config::ServiceConfig;

use super::auth::AuthClient;
use super::error::StorageError;
use super::storage::UploadSource;
use super::types::StorageEntry;

/// HTTP storage backend.
pub struct HttpStorage {
    config: ServiceConfig,
    auth: Arc<AuthClient>,
}

#[cfg(any(test, feature = "csr"))]
fn object_endpoint(base: &str, bucket: &str, path: &str) -> String {
    format!("{base}/storage/v1/object/{bucket}/{path}")
}

#[cfg(any(test, feature = "csr"))]
fn authenticated_object_endpoint(base: &str, bucket: &str, path: &str) -> String {
    format!("{base}/storage/v1/object/authenticated/{bucket}/{path}")
}

#[cfg(any(test, feature = "csr"))]
fn list_endpoint(base: &str, bucket: &str) -> String {
    format!("{base}/storage/v1/object/list/{bucket}")
}

#[cfg(any(test, feature = "csr"))]
fn bucket_endpoint(base: &str, bucket: &str) -> String {
    format!("{base}/storage/v1/object/{bucket}")
}

impl HttpStorage {
    #[must_use]
    pub fn new(config: ServiceConfig, auth: Arc<AuthClient>) -> Self {
        Self { config, auth }
    }

    #[cfg(feature = "csr")]
    fn bearer(&self) -> String {
        let token = self.auth.access_token().unwrap_or_else(|| self.config.key.clone());
        format!("Bearer {token}")
    }

    /// # Errors
    ///
    /// [`StorageError::Service`] on a rejected request,
    /// [`StorageError::Transport`] on a failed one.
    #[allow(clippy::unused_async)]
    pub async fn upload(&self, bucket: &str, path: &str, source: &UploadSource) -> Result<String, StorageError> {
        #[cfg(feature = "csr")]
        {
            let Some(file) = source.file.clone() else {
                return Err(StorageError::Transport("upload source has no browser file handle".to_owned()));
            };
            let resp = gloo_net::http::Request::post(&object_endpoint(&self.config.url, bucket, path))
                .header("apikey", &self.config.key)
                .header("Authorization", &self.bearer())
                .header("cache-control", "3600")
                .header("x-upsert", "false")
                .body(file)
                .map_err(|e| StorageError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StorageError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(StorageError::Service(storage_error_message(resp.status(), &body)));
            }
            Ok(path.to_owned())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bucket, path, source);
            Err(StorageError::Unsupported)
        }
    }

    /// # Errors
    ///
    /// Same contract as [`HttpStorage::upload`].
    #[allow(clippy::unused_async)]
    pub async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<StorageEntry>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let payload = list_payload(prefix);
            let resp = gloo_net::http::Request::post(&list_endpoint(&self.config.url, bucket))
                .header("apikey", &self.config.key)
                .header("Authorization", &self.bearer())
                .json(&payload)
                .map_err(|e| StorageError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StorageError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(StorageError::Service(storage_error_message(resp.status(), &body)));
            }
            resp.json().await.map_err(|e| StorageError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bucket, prefix);
            Err(StorageError::Unsupported)
        }
    }

    /// # Errors
    ///
    /// Same contract as [`HttpStorage::upload`].
    #[allow(clippy::unused_async)]
    pub async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&authenticated_object_endpoint(&self.config.url, bucket, path))
                .header("apikey", &self.config.key)
                .header("Authorization", &self.bearer())
                .send()
                .await
                .map_err(|e| StorageError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(StorageError::Service(storage_error_message(resp.status(), &body)));
            }
            resp.binary().await.map_err(|e| StorageError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bucket, path);
            Err(StorageError::Unsupported)
        }
    }

    /// # Errors
    ///
    /// Same contract as [`HttpStorage::upload`].
    #[allow(clippy::unused_async)]
    pub async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "prefixes": paths });
            let resp = gloo_net::http::Request::delete(&bucket_endpoint(&self.config.url, bucket))
                .header("apikey", &self.config.key)
                .header("Authorization", &self.bearer())
                .json(&payload)
                .map_err(|e| StorageError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StorageError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(StorageError::Service(storage_error_message(resp.status(), &body)));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (bucket, paths);
            Err(StorageError::Unsupported)
        }
    }
}

/// List request body: prefix plus newest-first ordering.
#[cfg(any(test, feature = "csr"))]
fn list_payload(prefix: &str) -> serde_json::Value {
    serde_json::json!({
        "prefix": prefix,
        "limit": 100,
        "sortBy": { "column": "created_at", "order": "desc" },
    })
}

/// Extract a user-presentable message from a storage error body.
#[cfg(any(test, feature = "csr"))]
fn storage_error_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }
    format!("request failed with status {status}")
}
