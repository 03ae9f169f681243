//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod location;
pub mod speech;
pub mod storage;
pub mod user_table;

// Re-exports
pub use location::ManualLocation;
pub use speech::{
    CommandSpeechEngine, ConsoleSpeechEngine, RecordingSpeechEngine, DEFAULT_SPEECH_PROGRAM,
};
pub use storage::{JsonFileStore, MemorySessionStore};
pub use user_table::InMemoryUserRepository;
