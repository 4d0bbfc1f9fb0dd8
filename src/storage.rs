//! Key-value storage for tracker state.
//!
//! Each tracker owns a small set of string keys and serializes its own
//! payloads; the store itself is string-oriented only.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur during key-value store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error for {}: {source}", path.display())]
    Dir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Namespaced async string store. All tracker persistence goes through
/// this seam so tests can swap in [`MemoryStore`].
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed store: one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Maps a key like `@meal_logs` to `meal_logs.json`.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.data_dir
            .join(format!("{}.json", name.trim_matches('_')))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StorageError::Dir {
                path: self.data_dir.clone(),
                source: e,
            })?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| StorageError::Io {
                key: key.to_string(),
                source: e,
            })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut entries = match tokio::fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(StorageError::Dir {
                    path: self.data_dir.clone(),
                    source: e,
                })
            }
        };

        let wrap = |e| StorageError::Dir {
            path: self.data_dir.clone(),
            source: e,
        };
        while let Some(entry) = entries.next_entry().await.map_err(wrap)? {
            if entry.file_type().await.map_err(wrap)?.is_file() {
                tokio::fs::remove_file(entry.path()).await.map_err(wrap)?;
            }
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}
