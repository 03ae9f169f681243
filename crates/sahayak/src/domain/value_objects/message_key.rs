//! MessageKey - Identifiers of user-visible phrases

use serde::{Deserialize, Serialize};

/// Key into the phrase catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    AppName,
    WelcomeMessage,
    BackToHome,
    ReligiousMode,
    ReligiousDescription,
    ReligiousWelcome,
    ReligiousUserQuery,
    ReligiousAiResponse,
    WellnessMode,
    WellnessDescription,
    WellnessWelcome,
    WellnessUserQuery,
    WellnessAiResponse,
    ShoppingMode,
    ShoppingDescription,
    ShoppingWelcome,
    ShoppingUserQuery,
    ShoppingAiResponseWithLocation,
    ShoppingAiResponseNoLocation,
    SchemeMode,
    SchemeDescription,
    SchemeWelcome,
    SchemeUserQuery,
    SchemeAiResponse,
    DefaultUserQuery,
    DefaultAiResponse,
    Listening,
    EmergencyCall,
    Logout,
}

impl MessageKey {
    pub const ALL: [MessageKey; 29] = [
        MessageKey::AppName,
        MessageKey::WelcomeMessage,
        MessageKey::BackToHome,
        MessageKey::ReligiousMode,
        MessageKey::ReligiousDescription,
        MessageKey::ReligiousWelcome,
        MessageKey::ReligiousUserQuery,
        MessageKey::ReligiousAiResponse,
        MessageKey::WellnessMode,
        MessageKey::WellnessDescription,
        MessageKey::WellnessWelcome,
        MessageKey::WellnessUserQuery,
        MessageKey::WellnessAiResponse,
        MessageKey::ShoppingMode,
        MessageKey::ShoppingDescription,
        MessageKey::ShoppingWelcome,
        MessageKey::ShoppingUserQuery,
        MessageKey::ShoppingAiResponseWithLocation,
        MessageKey::ShoppingAiResponseNoLocation,
        MessageKey::SchemeMode,
        MessageKey::SchemeDescription,
        MessageKey::SchemeWelcome,
        MessageKey::SchemeUserQuery,
        MessageKey::SchemeAiResponse,
        MessageKey::DefaultUserQuery,
        MessageKey::DefaultAiResponse,
        MessageKey::Listening,
        MessageKey::EmergencyCall,
        MessageKey::Logout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::AppName => "app_name",
            MessageKey::WelcomeMessage => "welcome_message",
            MessageKey::BackToHome => "back_to_home",
            MessageKey::ReligiousMode => "religious_mode",
            MessageKey::ReligiousDescription => "religious_description",
            MessageKey::ReligiousWelcome => "religious_welcome",
            MessageKey::ReligiousUserQuery => "religious_user_query",
            MessageKey::ReligiousAiResponse => "religious_ai_response",
            MessageKey::WellnessMode => "wellness_mode",
            MessageKey::WellnessDescription => "wellness_description",
            MessageKey::WellnessWelcome => "wellness_welcome",
            MessageKey::WellnessUserQuery => "wellness_user_query",
            MessageKey::WellnessAiResponse => "wellness_ai_response",
            MessageKey::ShoppingMode => "shopping_mode",
            MessageKey::ShoppingDescription => "shopping_description",
            MessageKey::ShoppingWelcome => "shopping_welcome",
            MessageKey::ShoppingUserQuery => "shopping_user_query",
            MessageKey::ShoppingAiResponseWithLocation => "shopping_ai_response_with_location",
            MessageKey::ShoppingAiResponseNoLocation => "shopping_ai_response_no_location",
            MessageKey::SchemeMode => "scheme_mode",
            MessageKey::SchemeDescription => "scheme_description",
            MessageKey::SchemeWelcome => "scheme_welcome",
            MessageKey::SchemeUserQuery => "scheme_user_query",
            MessageKey::SchemeAiResponse => "scheme_ai_response",
            MessageKey::DefaultUserQuery => "default_user_query",
            MessageKey::DefaultAiResponse => "default_ai_response",
            MessageKey::Listening => "listening",
            MessageKey::EmergencyCall => "emergency_call",
            MessageKey::Logout => "logout",
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
