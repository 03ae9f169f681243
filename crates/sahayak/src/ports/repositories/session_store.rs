//! Session Store Port
//!
//! A small string key-value store holding the persisted session,
//! modelled on browser local storage.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Key under which the serialized current user is kept
pub const SESSION_USER_KEY: &str = "user";

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}
