//! User Repository Port
//!
//! Abstract interface for the account store consulted by login and signup.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, SignupData, User};

/// Repository interface for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the account whose email and password both match exactly.
    /// The returned user never carries the secret.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Store a new account under the given id.
    /// Duplicate emails are accepted; the first match wins on lookup.
    async fn register(&self, id: &str, data: &SignupData) -> Result<User, DomainError>;
}
