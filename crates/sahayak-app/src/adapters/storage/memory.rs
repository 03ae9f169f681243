//! In-memory implementation of SessionStore

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use sahayak::{DomainError, SessionStore};

/// Volatile key-value store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry, e.g. a session left by an earlier run
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Store whose removals fail, for exercising logout against a broken disk
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StuckStore(pub(crate) MemorySessionStore);

#[cfg(test)]
#[async_trait]
impl SessionStore for StuckStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.0.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.0.set(key, value).await
    }

    async fn remove(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Repository("disk".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("user").await.unwrap(), None);

        store.set("user", "{}").await.unwrap();
        assert_eq!(store.get("user").await.unwrap().as_deref(), Some("{}"));

        store.remove("user").await.unwrap();
        store.remove("user").await.unwrap();
        assert_eq!(store.get("user").await.unwrap(), None);
    }
}
