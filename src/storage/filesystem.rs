//! File system storage backend
//!
//! Maps storage keys onto files below a base directory.
//!
//! ## Security
//!
//! Keys containing ".." are rejected, and keys resolving to existing paths
//! must stay inside the base directory after canonicalization.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File system storage backend
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl FileSystemStorageBackend {
    /// Create a backend rooted at `base_path`
    ///
    /// # Example
    ///
    /// ```rust
    /// use ontology_changes_sdk::storage::FileSystemStorageBackend;
    ///
    /// let backend = FileSystemStorageBackend::new("/var/lib/ontology-changes");
    /// assert_eq!(backend.base_path().to_str(), Some("/var/lib/ontology-changes"));
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a storage key to a path below the base directory
    fn resolve_key(&self, key: &str) -> Result<PathBuf, StorageError> {
        let normalized = key.trim_start_matches('/');
        if normalized.contains("..") {
            return Err(StorageError::PermissionDenied(format!(
                "Path traversal (..) not allowed in key {}",
                key
            )));
        }

        let full = self.base_path.join(normalized);
        if full
            .components()
            .any(|component| matches!(component, Component::ParentDir))
        {
            return Err(StorageError::PermissionDenied(
                "Path traversal not allowed".to_string(),
            ));
        }

        // Only paths that already exist can be canonicalized
        let existing = if full.exists() {
            Some(full.as_path())
        } else {
            full.parent().filter(|parent| parent.exists())
        };
        if let Some(existing) = existing {
            let canonical = existing
                .canonicalize()
                .map_err(|e| StorageError::IoError(format!("Failed to resolve {}: {}", key, e)))?;
            let base = self
                .base_path
                .canonicalize()
                .unwrap_or_else(|_| self.base_path.clone());
            if !canonical.starts_with(&base) {
                return Err(StorageError::PermissionDenied(format!(
                    "Key {} escapes the base directory",
                    key
                )));
            }
        }

        Ok(full)
    }
}

#[async_trait(?Send)]
impl StorageBackend for FileSystemStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let full_path = self.resolve_key(path)?;

        fs::read(&full_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::FileNotFound(path.to_string()),
            _ => StorageError::IoError(format!("Failed to read file {}: {}", path, e)),
        })
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve_key(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::IoError(format!("Failed to create directory for {}: {}", path, e))
            })?;
        }

        fs::write(&full_path, content)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to write file {}: {}", path, e)))?;
        debug!(key = path, bytes = content.len(), "Wrote file");
        Ok(())
    }

    async fn list_files(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        let full_path = self.resolve_key(dir)?;

        let mut read_dir = fs::read_dir(&full_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::DirectoryNotFound(dir.to_string()),
            _ => StorageError::IoError(format!("Failed to read directory {}: {}", dir, e)),
        })?;

        let mut entries = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to read directory entry: {}", e)))?
        {
            if let Ok(file_type) = entry.file_type().await
                && file_type.is_file()
                && let Some(file_name) = entry.file_name().to_str()
            {
                entries.push(file_name.to_string());
            }
        }
        entries.sort();

        Ok(entries)
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.resolve_key(path)?;

        match fs::metadata(&full_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to check file existence {}: {}",
                path, e
            ))),
        }
    }

    async fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        let full_path = self.resolve_key(path)?;

        fs::create_dir_all(&full_path).await.map_err(|e| {
            StorageError::IoError(format!("Failed to create directory {}: {}", path, e))
        })
    }

    async fn dir_exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.resolve_key(path)?;

        match fs::metadata(&full_path).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to check directory existence {}: {}",
                path, e
            ))),
        }
    }
}
