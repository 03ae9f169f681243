//! Repository Ports
//!
//! Abstract interfaces for credential lookup and session persistence.

mod session_store;
mod user_repository;

pub use session_store::*;
pub use user_repository::*;
