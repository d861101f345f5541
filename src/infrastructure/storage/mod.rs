//! File-based storage implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::traits::Store;
use crate::application::errors::StorageError;

/// JSON file-backed key-value store. Every write rewrites the whole file.
pub struct JsonStore {
    path: PathBuf,
    kv: Arc<RwLock<BTreeMap<String, String>>>,
}

impl JsonStore {
    /// Open the store, reading existing values if the file is present.
    /// An unreadable file is treated as empty and replaced on the next write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let kv = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(kv) => kv,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt preference store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened preference store at {} ({} keys)", path.display(), kv.len());

        Ok(Self {
            path,
            kv: Arc::new(RwLock::new(kv)),
        })
    }

    async fn flush(&self, kv: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(kv)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for JsonStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let kv = self.kv.read().await;
        Ok(kv.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut kv = self.kv.write().await;
        kv.insert(key.to_string(), value.to_string());
        self.flush(&kv).await
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    kv: RwLock<BTreeMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.kv.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.kv.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonStore::open(&path).await.unwrap();
        assert_eq!(store.get("theme").await.unwrap(), None);
        store.set("theme", "dark").await.unwrap();

        let reopened = JsonStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));

        reopened.set("theme", "light").await.unwrap();
        let again = JsonStore::open(&path).await.unwrap();
        assert_eq!(again.get("theme").await.unwrap().as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn test_corrupt_file_opens_empty_and_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{oops").unwrap();

        let store = JsonStore::open(&path).await.unwrap();
        assert_eq!(store.get("theme").await.unwrap(), None);

        store.set("theme", "dark").await.unwrap();
        let written: BTreeMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.get("theme").map(String::as_str), Some("dark"));
    }

    #[tokio::test]
    async fn test_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/prefs.json");

        let store = JsonStore::open(&path).await.unwrap();
        store.set("theme", "light").await.unwrap();
        assert!(path.exists());
    }
}
