//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - User: The signed-in person (or the guest placeholder)
//! - UserRecord: A stored account, user plus secret
//! - TranscriptEntry: One line of the assistant conversation

mod transcript;
mod user;

pub use transcript::*;
pub use user::*;
