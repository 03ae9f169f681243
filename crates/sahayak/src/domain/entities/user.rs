//! User - The person using the assistant
//!
//! Pure domain entity without infrastructure dependencies.
//! The serialized form doubles as the persisted session record, so the
//! field names follow the stored layout (camelCase, absent optionals omitted).

use serde::{Deserialize, Serialize};

/// Identifier of the fixed guest account
pub const GUEST_USER_ID: &str = "guest";

/// Someone to call in an emergency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

impl EmergencyContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// National emergency line assigned to guests
    pub fn emergency_services() -> Self {
        Self::new("Emergency Services", "108")
    }

    /// Contact shown when the current user has none on file
    pub fn fallback() -> Self {
        Self::new("Rahul", "+91 98765 43210")
    }
}

/// The current user of the assistant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
}

impl User {
    /// The fixed placeholder identity used by "continue as guest"
    pub fn guest() -> Self {
        Self {
            id: GUEST_USER_ID.to_string(),
            name: "Guest User".to_string(),
            email: "guest@example.com".to_string(),
            age: None,
            religion: None,
            emergency_contact: Some(EmergencyContact::emergency_services()),
        }
    }

    pub fn is_guest(&self) -> bool {
        self.id == GUEST_USER_ID
    }

    /// Build a user from signup details with a freshly issued id
    pub fn from_signup(id: impl Into<String>, data: &SignupData) -> Self {
        Self {
            id: id.into(),
            name: data.name.clone(),
            email: data.email.clone(),
            age: data.age,
            religion: data.religion.clone(),
            emergency_contact: data.emergency_contact.clone(),
        }
    }
}

/// Details collected by the signup form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
}

impl SignupData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            age: None,
            religion: None,
            emergency_contact: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_religion(mut self, religion: impl Into<String>) -> Self {
        self.religion = Some(religion.into());
        self
    }

    pub fn with_emergency_contact(mut self, contact: EmergencyContact) -> Self {
        self.emergency_contact = Some(contact);
        self
    }
}

/// A stored account: the user together with its password
///
/// Only credential stores hold these; the secret is dropped by
/// [`UserRecord::into_user`] before a user leaves the store.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    password: String,
}

impl UserRecord {
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
        }
    }

    /// Exact match on both email and password
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password == password
    }

    pub fn into_user(self) -> User {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_has_emergency_services_contact() {
        let guest = User::guest();
        assert!(guest.is_guest());
        assert_eq!(guest.name, "Guest User");
        assert_eq!(
            guest.emergency_contact,
            Some(EmergencyContact::new("Emergency Services", "108"))
        );
    }

    #[test]
    fn test_serialized_layout_is_camel_case_without_nulls() {
        let user = User::guest();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["emergencyContact"]["phone"], "108");
        assert!(json.get("age").is_none());
        assert!(json.get("religion").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let user: User =
            serde_json::from_str(r#"{"id":"abc","name":"Asha","email":"asha@example.com"}"#)
                .unwrap();
        assert_eq!(user.id, "abc");
        assert_eq!(user.age, None);
        assert_eq!(user.emergency_contact, None);
    }

    #[test]
    fn test_record_matches_exactly() {
        let record = UserRecord::new(User::guest(), "secret");
        assert!(record.matches("guest@example.com", "secret"));
        assert!(!record.matches("guest@example.com", "Secret"));
        assert!(!record.matches("GUEST@example.com", "secret"));
    }

    #[test]
    fn test_from_signup_copies_profile() {
        let data = SignupData::new("Meena", "meena@example.com", "pw")
            .with_age(71)
            .with_religion("Sikh")
            .with_emergency_contact(EmergencyContact::new("Harpreet", "+91 90000 00000"));
        let user = User::from_signup("x1y2z3a", &data);
        assert_eq!(user.id, "x1y2z3a");
        assert_eq!(user.age, Some(71));
        assert_eq!(user.religion.as_deref(), Some("Sikh"));
        assert_eq!(user.emergency_contact.unwrap().name, "Harpreet");
    }
}
