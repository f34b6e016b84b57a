//! Directory-backed store for raw image uploads.
//!
//! Keys are generated, never client-controlled: a UUID prefix joined to the
//! sanitised original filename. Concurrent uploads of identically named
//! files land in distinct files, and a key is always a single safe path
//! component.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use morpho_core::sanitize_filename;

use crate::StoreError;

/// A persisted upload.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Storage key: single path component, safe to embed in URLs.
    pub key: String,
    /// Path of the written file inside the store.
    pub path: PathBuf,
    /// When the upload was written.
    pub uploaded_at: DateTime<Utc>,
}

/// Directory-backed upload store.
///
/// The directory is created at open time so the first request never races
/// directory creation.
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the root directory if it does not exist.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Persist one upload under a fresh collision-free key.
    pub fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredUpload, StoreError> {
        if bytes.is_empty() {
            return Err(StoreError::EmptyUpload(original_name.to_string()));
        }

        let key = format!("{}-{}", Uuid::new_v4(), sanitize_filename(original_name));
        let path = self.root.join(&key);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), size = bytes.len(), "saved upload");

        Ok(StoredUpload {
            key,
            path,
            uploaded_at: Utc::now(),
        })
    }

    /// Path a key resolves to inside the store.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
