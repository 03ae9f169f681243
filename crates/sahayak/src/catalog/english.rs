use crate::domain::MessageKey;

pub(super) fn phrase(key: MessageKey) -> Option<&'static str> {
    let text = match key {
        MessageKey::AppName => "Sahayak",
        MessageKey::WelcomeMessage => {
            "Namaste! I am Sahayak, your helper. Choose what you would like to do today, or press the microphone and talk to me."
        }
        MessageKey::BackToHome => "We are back at the home screen. What would you like to do next?",
        MessageKey::ReligiousMode => "Spiritual Guide",
        MessageKey::ReligiousDescription => "Prayers, festivals and nearby temples",
        MessageKey::ReligiousWelcome => {
            "Welcome to the spiritual guide. Ask me about prayers, festivals or places of worship."
        }
        MessageKey::ReligiousUserQuery => "What is today's auspicious time for prayer?",
        MessageKey::ReligiousAiResponse => {
            "Today the morning prayer is best between 6:00 and 7:30 AM. Would you like me to play a bhajan?"
        }
        MessageKey::WellnessMode => "Health & Wellness",
        MessageKey::WellnessDescription => "Medicine reminders, exercise and daily health tips",
        MessageKey::WellnessWelcome => {
            "Welcome to health and wellness. I can remind you about medicines and suggest gentle exercises."
        }
        MessageKey::WellnessUserQuery => "When should I take my blood pressure medicine?",
        MessageKey::WellnessAiResponse => {
            "Your blood pressure tablet is due at 8:00 PM after dinner. I will remind you 10 minutes before."
        }
        MessageKey::ShoppingMode => "Shopping Help",
        MessageKey::ShoppingDescription => "Order groceries and find shops near you",
        MessageKey::ShoppingWelcome => {
            "Welcome to shopping help. Tell me what you need and I will find it for you."
        }
        MessageKey::ShoppingUserQuery => "I need to buy milk and bread.",
        MessageKey::ShoppingAiResponseWithLocation => {
            "I found three grocery stores that deliver near you ({location}). The closest can bring milk and bread within 30 minutes. Shall I place the order?"
        }
        MessageKey::ShoppingAiResponseNoLocation => {
            "I can help you order milk and bread. Please allow location access so I can find stores near you."
        }
        MessageKey::SchemeMode => "Government Schemes",
        MessageKey::SchemeDescription => "Pensions, health cards and benefits for seniors",
        MessageKey::SchemeWelcome => {
            "Welcome to government schemes. Ask me about pensions, health insurance or other benefits."
        }
        MessageKey::SchemeUserQuery => "Am I eligible for the old age pension?",
        MessageKey::SchemeAiResponse => {
            "Citizens above 60 can apply for the national old age pension. You will need your Aadhaar card and a bank account. Shall I explain the steps?"
        }
        MessageKey::DefaultUserQuery => "What can you help me with?",
        MessageKey::DefaultAiResponse => {
            "I can guide your prayers, remind you about medicines, help with shopping and explain government schemes. Just pick one."
        }
        MessageKey::Listening => "Listening...",
        MessageKey::EmergencyCall => "Emergency Call",
        MessageKey::Logout => "Log out",
    };
    Some(text)
}
