//! In-memory implementation of UserRepository
//!
//! A flat account table checked by exact equality. Accounts added by
//! signup last only as long as the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use sahayak::{DomainError, EmergencyContact, SignupData, User, UserRecord, UserRepository};

/// Demo account shipped with the assistant
pub const DEMO_EMAIL: &str = "rajesh@example.com";
pub const DEMO_PASSWORD: &str = "password123";

pub struct InMemoryUserRepository {
    records: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Table seeded with the demo account
    pub fn with_demo_accounts() -> Self {
        let rajesh = User {
            id: "1".to_string(),
            name: "Rajesh Kumar".to_string(),
            email: DEMO_EMAIL.to_string(),
            age: Some(65),
            religion: Some("Hindu".to_string()),
            emergency_contact: Some(EmergencyContact::new("Rahul Kumar", "+91 98765 43210")),
        };
        Self::new(vec![UserRecord::new(rajesh, DEMO_PASSWORD)])
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.matches(email, password))
            .cloned()
            .map(UserRecord::into_user))
    }

    async fn register(&self, id: &str, data: &SignupData) -> Result<User, DomainError> {
        let user = User::from_signup(id, data);
        self.records
            .write()
            .await
            .push(UserRecord::new(user.clone(), data.password.clone()));
        Ok(user)
    }
}
