//! Language - Interface and speech language

use serde::{Deserialize, Serialize};

/// Languages the phrase catalog and speech output support
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// BCP 47 tag handed to the speech engine
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Hindi => write!(f, "हिन्दी"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::English),
            "hi" | "hi-in" | "hindi" => Ok(Language::Hindi),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}
