//! AvatarMood - Display-only emotion tag for the assistant avatar

use serde::{Deserialize, Serialize};

/// Avatar mood, derived from the active mode and the listening state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AvatarMood {
    #[default]
    Neutral,
    Happy,
    Thinking,
    Religious,
    Wellness,
    Shopping,
}

impl std::fmt::Display for AvatarMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvatarMood::Neutral => write!(f, "neutral"),
            AvatarMood::Happy => write!(f, "happy"),
            AvatarMood::Thinking => write!(f, "thinking"),
            AvatarMood::Religious => write!(f, "religious"),
            AvatarMood::Wellness => write!(f, "wellness"),
            AvatarMood::Shopping => write!(f, "shopping"),
        }
    }
}
