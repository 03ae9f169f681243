//! Sahayak Domain Library
//!
//! Core domain types and interfaces for the Sahayak voice assistant,
//! a conversational companion for senior users.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, TranscriptEntry)
//!   - `value_objects/`: Immutable value types (Mode, AvatarMood, Language, GeoLocation)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Credential lookup and session persistence
//!   - `services/`: Translation, geolocation and speech synthesis
//!
//! - **Catalog** (`catalog/`): Built-in phrase tables implementing [`Translator`]
//!
//! # Usage
//!
//! ```rust,ignore
//! use sahayak::domain::{Mode, User, TranscriptEntry};
//! use sahayak::ports::{SessionStore, SpeechEngine, Translator};
//! ```

pub mod catalog;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use catalog::Catalog;
pub use domain::{
    AvatarMood, DomainError, EmergencyContact, GeoLocation, Language, MessageKey, Mode,
    SignupData, TranscriptEntry, User, UserRecord,
};
pub use ports::{
    LocationProvider, SessionStore, SpeechEngine, Translator, UserRepository, Utterance,
    UtteranceObserver, SESSION_USER_KEY,
};
