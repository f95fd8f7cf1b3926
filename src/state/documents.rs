//! Per-user verification document listing and upload flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Documents live in the storage collaborator under a `{userId}/` prefix;
//! the stored object name carries an upload timestamp so listings stay
//! unique and ordered. This module owns the path scheme, the record
//! mapping, and the async flows the documents page drives. The simulated
//! upload progress bar is NOT here: it is presentation-only and lives with
//! the upload component.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use thiserror::Error;

use crate::config::{self, DOCUMENTS_BUCKET};
use crate::net::error::StorageError;
use crate::net::storage::{StorageClient, UploadSource};
use crate::net::types::StorageEntry;

/// Metadata describing one stored file belonging to a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Object identifier from the storage listing.
    pub id: String,
    /// Display name with the timestamp prefix stripped.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Creation timestamp as reported by the service.
    pub created_at: String,
    /// Last-update timestamp, falling back to creation.
    pub updated_at: String,
    /// Full storage path, `{userId}/{storedName}`.
    pub path: String,
}

/// Rejection raised before or during an upload.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The file was rejected client-side; no request was issued.
    #[error("File size exceeds {limit_mb}MB limit")]
    TooLarge { limit_mb: u64 },
    /// The storage collaborator rejected the request.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Listing state for the documents page.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub files: Vec<DocumentRecord>,
    pub loading: bool,
    /// Record selected for deletion, awaiting explicit confirmation.
    pub pending_delete: Option<DocumentRecord>,
}

impl DocumentsState {
    pub fn set_files(&mut self, files: Vec<DocumentRecord>) {
        self.files = files;
    }

    /// Drop exactly the record with `id`; returns whether one was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    pub fn select_for_delete(&mut self, record: DocumentRecord) {
        self.pending_delete = Some(record);
    }

    pub fn clear_pending(&mut self) {
        self.pending_delete = None;
    }
}

/// Storage path for a fresh upload: `{userId}/{millis}_{originalName}`.
#[must_use]
pub fn object_path(user_id: &str, timestamp_ms: u64, file_name: &str) -> String {
    format!("{user_id}/{timestamp_ms}_{file_name}")
}

/// Display name of a stored object: the timestamp prefix is stripped; a
/// name without one is shown unchanged.
#[must_use]
pub fn display_name(stored: &str) -> String {
    match stored.split_once('_') {
        Some((_, rest)) => rest.to_owned(),
        None => stored.to_owned(),
    }
}

/// Map one listing entry into a [`DocumentRecord`].
#[must_use]
pub fn record_from_entry(user_id: &str, entry: &StorageEntry) -> DocumentRecord {
    let created_at = entry.created_at.clone().unwrap_or_default();
    DocumentRecord {
        id: entry.id.clone().unwrap_or_else(|| entry.name.clone()),
        name: display_name(&entry.name),
        size: entry.metadata.as_ref().map_or(0, |m| m.size),
        created_at: created_at.clone(),
        updated_at: entry.updated_at.clone().unwrap_or(created_at),
        path: format!("{user_id}/{}", entry.name),
    }
}

/// Validate an upload and build its storage path without issuing any
/// request. Size strictly greater than the limit fails fast.
///
/// # Errors
///
/// [`UploadError::TooLarge`] when the file exceeds the configured limit.
pub fn prepare_upload(user_id: &str, file_name: &str, size: u64, now_ms: u64) -> Result<String, UploadError> {
    if size > config::max_upload_bytes() {
        return Err(UploadError::TooLarge { limit_mb: config::MAX_UPLOAD_MB });
    }
    Ok(object_path(user_id, now_ms, file_name))
}

/// List the user's documents, newest first.
///
/// # Errors
///
/// Propagates the collaborator's error for the caller to log and toast.
pub async fn fetch_documents(storage: &StorageClient, user_id: &str) -> Result<Vec<DocumentRecord>, StorageError> {
    let entries = storage.list(DOCUMENTS_BUCKET, user_id).await?;
    Ok(entries.iter().map(|entry| record_from_entry(user_id, entry)).collect())
}

/// Upload one document and return its storage path.
///
/// # Errors
///
/// [`UploadError::TooLarge`] before any request, or the collaborator's
/// rejection afterwards.
pub async fn upload_document(
    storage: &StorageClient,
    user_id: &str,
    source: &UploadSource,
    now_ms: u64,
) -> Result<String, UploadError> {
    let path = prepare_upload(user_id, &source.name, source.size, now_ms)?;
    let stored = storage.upload(DOCUMENTS_BUCKET, &path, source).await?;
    Ok(stored)
}

/// Delete one document by path.
///
/// # Errors
///
/// Propagates the collaborator's error; the caller keeps its listing
/// unchanged in that case.
pub async fn delete_document(storage: &StorageClient, path: &str) -> Result<(), StorageError> {
    storage.remove(DOCUMENTS_BUCKET, &[path.to_owned()]).await
}

/// Fetch one document's bytes for a local download.
///
/// # Errors
///
/// Propagates the collaborator's error.
pub async fn download_document(storage: &StorageClient, path: &str) -> Result<Vec<u8>, StorageError> {
    storage.download(DOCUMENTS_BUCKET, path).await
}
