//! In-memory storage backend

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

/// Storage backend keeping every file in a map keyed by path
///
/// Directories exist implicitly once a file is written below them, or
/// explicitly after `create_dir`.
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
    dirs: RwLock<BTreeSet<String>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with text files
    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let files = files
            .into_iter()
            .map(|(path, content)| (normalize(path), content.as_bytes().to_vec()))
            .collect();
        Self {
            files: RwLock::new(files),
            dirs: RwLock::default(),
        }
    }

    /// Every stored path, sorted
    pub fn paths(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read_lock()?.keys().cloned().collect())
    }

    fn read_lock(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>, StorageError> {
        self.files.read().map_err(poisoned)
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::BackendError("Memory storage lock poisoned".to_string())
}

#[async_trait(?Send)]
impl StorageBackend for MemoryStorageBackend {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.read_lock()?
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(path.to_string()))
    }

    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let mut files = self.files.write().map_err(poisoned)?;
        files.insert(normalize(path), content.to_vec());
        Ok(())
    }

    async fn list_files(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        let dir = normalize(dir);
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir.trim_end_matches('/'))
        };
        Ok(self
            .read_lock()?
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|name| !name.contains('/'))
            .map(str::to_string)
            .collect())
    }

    async fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.read_lock()?.contains_key(&normalize(path)))
    }

    async fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        let dir = normalize(path).trim_end_matches('/').to_string();
        self.dirs.write().map_err(poisoned)?.insert(dir);
        Ok(())
    }

    async fn dir_exists(&self, path: &str) -> Result<bool, StorageError> {
        let dir = normalize(path).trim_end_matches('/').to_string();
        if dir.is_empty() || self.dirs.read().map_err(poisoned)?.contains(&dir) {
            return Ok(true);
        }
        let prefix = format!("{}/", dir);
        Ok(self.read_lock()?.keys().any(|key| key.starts_with(&prefix)))
    }
}
