//! Sahayak Application Layer
//!
//! Use cases and infrastructure for the Sahayak voice assistant.
//!
//! - `application/`: the session manager, the conversation/mode controller,
//!   speech output, and the [`AppController`] that owns all three
//! - `adapters/`: implementations of the domain ports (session stores,
//!   the account table, speech engines, location sources)

pub mod adapters;
pub mod application;

pub use application::{
    AppController, ConversationConfig, ConversationController, ConversationEvent,
    ConversationSnapshot, SessionConfig, SessionEvent, SessionManager, SpeechOutput,
};
