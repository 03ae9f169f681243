//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! stores, speech, location and translation.

mod app_controller;
mod conversation_service;
mod session_service;
mod speech_service;

pub use app_controller::AppController;
pub use conversation_service::{
    ConversationConfig, ConversationController, ConversationEvent, ConversationSnapshot,
};
pub use session_service::{decode_user, encode_user, SessionConfig, SessionEvent, SessionManager};
pub use speech_service::SpeechOutput;
