//! Storage backend abstraction
//!
//! Defines the StorageBackend trait used to persist archived ontology
//! releases and rendered change reports:
//! - FileSystemStorageBackend: Native file system
//! - MemoryStorageBackend: In-process map (tests, embedding)
//!
//! Paths are storage keys such as `archive/2024-01-17_changes.json`.

use async_trait::async_trait;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Trait for storage backends
#[async_trait(?Send)]
pub trait StorageBackend: Send + Sync {
    /// Read a file from storage
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Write a file to storage, creating parent directories as needed
    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Names of the files directly inside a directory
    async fn list_files(&self, dir: &str) -> Result<Vec<String>, StorageError>;

    /// Check if a file exists
    async fn file_exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Create a directory (and parents)
    async fn create_dir(&self, path: &str) -> Result<(), StorageError>;

    /// Check if a directory exists
    async fn dir_exists(&self, path: &str) -> Result<bool, StorageError>;
}

/// Read a file and decode it as UTF-8
pub async fn read_text<B: StorageBackend + ?Sized>(
    storage: &B,
    path: &str,
) -> Result<String, StorageError> {
    let content = storage.read_file(path).await?;
    String::from_utf8(content)
        .map_err(|e| StorageError::SerializationError(format!("Invalid UTF-8 in {}: {}", path, e)))
}

/// Join a directory and a file name into a storage key
pub fn join_key(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

// Storage backend implementations
#[cfg(feature = "native-fs")]
pub mod filesystem;
pub mod memory;

#[cfg(feature = "native-fs")]
pub use filesystem::FileSystemStorageBackend;
pub use memory::MemoryStorageBackend;
