//! In-memory storage backend for development without service configuration.
//!
//! Holds object metadata only; contents are not retained, so mock
//! downloads yield empty files. Creation order is derived from the
//! timestamp prefix the upload flow bakes into each object name, falling
//! back to insertion order.

#[cfg(test)]
#[path = "storage_mock_test.rs"]
mod storage_mock_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

use super::error::StorageError;
use super::storage::UploadSource;
use super::types::{ObjectMetadata, StorageEntry};

const ALREADY_EXISTS: &str = "The resource already exists";
const NOT_FOUND: &str = "Object not found";

/// Mock storage backend.
#[derive(Debug, Default)]
pub struct MockStorage {
    objects: Mutex<Vec<MockObject>>,
    seq: AtomicU64,
}

#[derive(Clone, Debug)]
struct MockObject {
    id: String,
    path: String,
    size: u64,
    created_ms: u64,
    seq: u64,
}

impl MockStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Rejects a path that already holds an object, matching the
    /// service's `upsert: false` behavior.
    #[allow(clippy::unused_async)]
    pub async fn upload(&self, path: &str, source: &UploadSource) -> Result<String, StorageError> {
        let mut objects = lock(&self.objects);
        if objects.iter().any(|o| o.path == path) {
            return Err(StorageError::Service(ALREADY_EXISTS.to_owned()));
        }
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        objects.push(MockObject {
            id: Uuid::new_v4().to_string(),
            path: path.to_owned(),
            size: source.size,
            created_ms: timestamp_from_path(path).unwrap_or(seq),
            seq,
        });
        Ok(path.to_owned())
    }

    /// # Errors
    ///
    /// Never fails; typed to match the HTTP backend.
    #[allow(clippy::unused_async)]
    pub async fn list(&self, prefix: &str) -> Result<Vec<StorageEntry>, StorageError> {
        let folder = format!("{prefix}/");
        let mut matched: Vec<MockObject> = lock(&self.objects)
            .iter()
            .filter(|o| o.path.starts_with(&folder))
            .cloned()
            .collect();
        matched.sort_by(|a, b| (b.created_ms, b.seq).cmp(&(a.created_ms, a.seq)));
        Ok(matched
            .into_iter()
            .map(|o| {
                let name = o.path[folder.len()..].to_owned();
                let stamp = o.created_ms.to_string();
                StorageEntry {
                    id: Some(o.id),
                    name,
                    created_at: Some(stamp.clone()),
                    updated_at: Some(stamp),
                    metadata: Some(ObjectMetadata { size: o.size }),
                }
            })
            .collect())
    }

    /// # Errors
    ///
    /// Fails for unknown paths; known paths yield an empty byte vector
    /// since the mock keeps no contents.
    #[allow(clippy::unused_async)]
    pub async fn download(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        if lock(&self.objects).iter().any(|o| o.path == path) {
            Ok(Vec::new())
        } else {
            Err(StorageError::Service(NOT_FOUND.to_owned()))
        }
    }

    /// # Errors
    ///
    /// Never fails; removing an absent path is a no-op, as on the service.
    #[allow(clippy::unused_async)]
    pub async fn remove(&self, paths: &[String]) -> Result<(), StorageError> {
        lock(&self.objects).retain(|o| !paths.iter().any(|p| p == &o.path));
        Ok(())
    }

    /// Number of stored objects, across all prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.objects).len()
    }

    /// Whether the backend holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Millisecond timestamp baked into `{user}/{millis}_{name}` paths.
fn timestamp_from_path(path: &str) -> Option<u64> {
    let name = path.rsplit('/').next()?;
    let (stamp, _) = name.split_once('_')?;
    stamp.parse().ok()
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
