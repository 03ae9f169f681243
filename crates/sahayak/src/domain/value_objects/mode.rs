//! Mode - Which assistant persona is active

use serde::{Deserialize, Serialize};

use super::{AvatarMood, MessageKey};

/// Assistant mode: the home screen or one of the four personas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Home,
    Religious,
    Wellness,
    Shopping,
    Scheme,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Home,
        Mode::Religious,
        Mode::Wellness,
        Mode::Shopping,
        Mode::Scheme,
    ];

    /// Avatar mood shown while this mode is active.
    /// Scheme lookup has no persona of its own and stays neutral.
    pub fn mood(self) -> AvatarMood {
        match self {
            Mode::Home => AvatarMood::Happy,
            Mode::Religious => AvatarMood::Religious,
            Mode::Wellness => AvatarMood::Wellness,
            Mode::Shopping => AvatarMood::Shopping,
            Mode::Scheme => AvatarMood::Neutral,
        }
    }

    /// Line the assistant opens with when the mode is entered
    pub fn welcome_key(self) -> MessageKey {
        match self {
            Mode::Home => MessageKey::BackToHome,
            Mode::Religious => MessageKey::ReligiousWelcome,
            Mode::Wellness => MessageKey::WellnessWelcome,
            Mode::Shopping => MessageKey::ShoppingWelcome,
            Mode::Scheme => MessageKey::SchemeWelcome,
        }
    }

    /// Scripted utterance attributed to the user in this mode
    pub fn user_query_key(self) -> MessageKey {
        match self {
            Mode::Home => MessageKey::DefaultUserQuery,
            Mode::Religious => MessageKey::ReligiousUserQuery,
            Mode::Wellness => MessageKey::WellnessUserQuery,
            Mode::Shopping => MessageKey::ShoppingUserQuery,
            Mode::Scheme => MessageKey::SchemeUserQuery,
        }
    }

    /// Scripted assistant reply; shopping has a location-aware variant
    pub fn reply_key(self, has_location: bool) -> MessageKey {
        match self {
            Mode::Home => MessageKey::DefaultAiResponse,
            Mode::Religious => MessageKey::ReligiousAiResponse,
            Mode::Wellness => MessageKey::WellnessAiResponse,
            Mode::Shopping if has_location => MessageKey::ShoppingAiResponseWithLocation,
            Mode::Shopping => MessageKey::ShoppingAiResponseNoLocation,
            Mode::Scheme => MessageKey::SchemeAiResponse,
        }
    }

    /// Card description shown on the home screen
    pub fn description_key(self) -> Option<MessageKey> {
        match self {
            Mode::Home => None,
            Mode::Religious => Some(MessageKey::ReligiousDescription),
            Mode::Wellness => Some(MessageKey::WellnessDescription),
            Mode::Shopping => Some(MessageKey::ShoppingDescription),
            Mode::Scheme => Some(MessageKey::SchemeDescription),
        }
    }

    /// Title of the mode card
    pub fn title_key(self) -> MessageKey {
        match self {
            Mode::Home => MessageKey::AppName,
            Mode::Religious => MessageKey::ReligiousMode,
            Mode::Wellness => MessageKey::WellnessMode,
            Mode::Shopping => MessageKey::ShoppingMode,
            Mode::Scheme => MessageKey::SchemeMode,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Home => write!(f, "home"),
            Mode::Religious => write!(f, "religious"),
            Mode::Wellness => write!(f, "wellness"),
            Mode::Shopping => write!(f, "shopping"),
            Mode::Scheme => write!(f, "scheme"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Mode::Home),
            "religious" => Ok(Mode::Religious),
            "wellness" => Ok(Mode::Wellness),
            "shopping" => Ok(Mode::Shopping),
            "scheme" => Ok(Mode::Scheme),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_table() {
        assert_eq!(Mode::Home.mood(), AvatarMood::Happy);
        assert_eq!(Mode::Religious.mood(), AvatarMood::Religious);
        assert_eq!(Mode::Wellness.mood(), AvatarMood::Wellness);
        assert_eq!(Mode::Shopping.mood(), AvatarMood::Shopping);
        assert_eq!(Mode::Scheme.mood(), AvatarMood::Neutral);
    }

    #[test]
    fn test_shopping_reply_depends_on_location() {
        assert_eq!(
            Mode::Shopping.reply_key(true),
            MessageKey::ShoppingAiResponseWithLocation
        );
        assert_eq!(
            Mode::Shopping.reply_key(false),
            MessageKey::ShoppingAiResponseNoLocation
        );
        assert_eq!(Mode::Scheme.reply_key(true), MessageKey::SchemeAiResponse);
    }

    #[test]
    fn test_parse_and_display_agree() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!("Shopping".parse::<Mode>(), Ok(Mode::Shopping));
        assert!("cooking".parse::<Mode>().is_err());
    }
}
