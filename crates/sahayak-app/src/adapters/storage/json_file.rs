//! JSON file implementation of SessionStore
//!
//! All entries live in one JSON object on disk. Writes go to a sibling
//! temp file that is then renamed over the original.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

use sahayak::{DomainError, SessionStore};

type Entries = BTreeMap<String, String>;

/// File-backed key-value store
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Entries, DomainError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(DomainError::Repository(format!(
                    "Failed to read {:?}: {}",
                    self.path, e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            DomainError::MalformedPersistedState(format!("{:?} is not a JSON object: {}", self.path, e))
        })
    }

    /// Load for modification; an unreadable file is replaced rather than preserved
    async fn load_for_write(&self) -> Result<Entries, DomainError> {
        match self.load().await {
            Err(DomainError::MalformedPersistedState(reason)) => {
                tracing::warn!(path = ?self.path, %reason, "Discarding malformed storage file");
                Ok(Entries::new())
            }
            other => other,
        }
    }

    async fn write(&self, entries: &Entries) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await.map_err(|e| {
                    DomainError::Repository(format!("Failed to create {:?}: {}", dir, e))
                })?;
            }
        }

        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| DomainError::Repository(format!("Failed to serialize storage: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| DomainError::Repository(format!("Failed to write {:?}: {}", tmp, e)))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            DomainError::Repository(format!("Failed to replace {:?}: {}", self.path, e))
        })
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load_for_write().await?;
        entries.remove(key);
        self.write(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get("user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = JsonFileStore::new(&path);
        store.set("user", r#"{"id":"1"}"#).await.unwrap();
        store.set("theme", "dark").await.unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("user").await.unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));

        reopened.remove("user").await.unwrap();
        assert_eq!(store.get("user").await.unwrap(), None);
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_malformed_on_read_and_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.get("user").await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedPersistedState(_)));

        store.remove("user").await.unwrap();
        assert_eq!(store.get("user").await.unwrap(), None);
    }
}
