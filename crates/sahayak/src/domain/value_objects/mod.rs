//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod avatar_mood;
mod language;
mod location;
mod message_key;
mod mode;

pub use avatar_mood::*;
pub use language::*;
pub use location::*;
pub use message_key::*;
pub use mode::*;
