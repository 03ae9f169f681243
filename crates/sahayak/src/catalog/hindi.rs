use crate::domain::MessageKey;

pub(super) fn phrase(key: MessageKey) -> Option<&'static str> {
    let text = match key {
        MessageKey::AppName => "सहायक",
        MessageKey::WelcomeMessage => {
            "नमस्ते! मैं सहायक हूँ, आपका साथी। बताइए आज आप क्या करना चाहेंगे, या माइक दबाकर मुझसे बात कीजिए।"
        }
        MessageKey::BackToHome => "हम मुख्य स्क्रीन पर वापस आ गए हैं। अब आप क्या करना चाहेंगे?",
        MessageKey::ReligiousMode => "आध्यात्मिक मार्गदर्शक",
        MessageKey::ReligiousDescription => "प्रार्थना, त्योहार और पास के मंदिर",
        MessageKey::ReligiousWelcome => {
            "आध्यात्मिक मार्गदर्शक में आपका स्वागत है। प्रार्थना, त्योहार या पूजा स्थलों के बारे में पूछिए।"
        }
        MessageKey::ReligiousUserQuery => "आज पूजा का शुभ मुहूर्त क्या है?",
        MessageKey::ReligiousAiResponse => {
            "आज सुबह 6:00 से 7:30 बजे तक पूजा के लिए सबसे अच्छा समय है। क्या मैं एक भजन चलाऊँ?"
        }
        MessageKey::WellnessMode => "स्वास्थ्य और कल्याण",
        MessageKey::WellnessDescription => "दवा की याद, व्यायाम और रोज़ के स्वास्थ्य सुझाव",
        MessageKey::WellnessWelcome => {
            "स्वास्थ्य और कल्याण में आपका स्वागत है। मैं आपको दवाइयों की याद दिला सकता हूँ और हल्के व्यायाम बता सकता हूँ।"
        }
        MessageKey::WellnessUserQuery => "मुझे ब्लड प्रेशर की दवा कब लेनी है?",
        MessageKey::WellnessAiResponse => {
            "आपकी ब्लड प्रेशर की गोली रात 8:00 बजे खाने के बाद लेनी है। मैं 10 मिनट पहले याद दिला दूँगा।"
        }
        MessageKey::ShoppingMode => "खरीदारी सहायता",
        MessageKey::ShoppingDescription => "किराने का सामान मँगाइए और पास की दुकानें खोजिए",
        MessageKey::ShoppingWelcome => {
            "खरीदारी सहायता में आपका स्वागत है। बताइए आपको क्या चाहिए, मैं ढूँढ दूँगा।"
        }
        MessageKey::ShoppingUserQuery => "मुझे दूध और ब्रेड खरीदनी है।",
        MessageKey::ShoppingAiResponseWithLocation => {
            "आपके पास ({location}) तीन किराना दुकानें मिलीं जो घर पहुँचाती हैं। सबसे नज़दीकी दुकान 30 मिनट में दूध और ब्रेड ला सकती है। क्या ऑर्डर कर दूँ?"
        }
        MessageKey::ShoppingAiResponseNoLocation => {
            "मैं दूध और ब्रेड मँगाने में मदद कर सकता हूँ। पास की दुकानें खोजने के लिए कृपया स्थान की अनुमति दीजिए।"
        }
        MessageKey::SchemeMode => "सरकारी योजनाएँ",
        MessageKey::SchemeDescription => "पेंशन, स्वास्थ्य कार्ड और वरिष्ठ नागरिकों के लाभ",
        MessageKey::SchemeWelcome => {
            "सरकारी योजनाओं में आपका स्वागत है। पेंशन, स्वास्थ्य बीमा या अन्य लाभों के बारे में पूछिए।"
        }
        MessageKey::SchemeUserQuery => "क्या मैं वृद्धावस्था पेंशन के लिए पात्र हूँ?",
        MessageKey::SchemeAiResponse => {
            "60 वर्ष से अधिक आयु के नागरिक राष्ट्रीय वृद्धावस्था पेंशन के लिए आवेदन कर सकते हैं। आपको आधार कार्ड और बैंक खाता चाहिए। क्या मैं तरीका बताऊँ?"
        }
        MessageKey::DefaultUserQuery => "आप मेरी किस चीज़ में मदद कर सकते हैं?",
        MessageKey::DefaultAiResponse => {
            "मैं पूजा में मार्गदर्शन, दवा की याद, खरीदारी में मदद और सरकारी योजनाओं की जानकारी दे सकता हूँ। बस एक चुनिए।"
        }
        MessageKey::Listening => "सुन रहा हूँ...",
        MessageKey::EmergencyCall => "आपातकालीन कॉल",
        MessageKey::Logout => "लॉग आउट",
    };
    Some(text)
}
