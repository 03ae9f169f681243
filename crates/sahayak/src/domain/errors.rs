//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Login attempted with an email/password pair that matches no account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The persisted session record could not be decoded
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),

    /// The speech engine reported a failure for the current utterance
    #[error("Speech synthesis error: {0}")]
    SpeechSynthesis(String),

    /// An operation that needs a signed-in user was called without one
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}
