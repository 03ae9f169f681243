//! TranscriptEntry - One exchanged line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line in the conversation transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptEntry {
    pub text: String,
    /// True when the (simulated) user said it, false for the assistant
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }
}
