//! Phrase Catalog
//!
//! Built-in phrase tables for every [`Language`], implementing [`Translator`].
//! Lookups fall back to English, then to the raw key name.

mod english;
mod hindi;

use crate::domain::{Language, MessageKey};
use crate::ports::Translator;

/// Static phrase tables
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    fn lookup(language: Language, key: MessageKey) -> Option<&'static str> {
        match language {
            Language::English => english::phrase(key),
            Language::Hindi => hindi::phrase(key),
        }
    }
}

impl Translator for Catalog {
    fn translate(&self, language: Language, key: MessageKey, params: &[(&str, &str)]) -> String {
        let template = Self::lookup(language, key)
            .or_else(|| english::phrase(key))
            .unwrap_or_else(|| key.as_str());
        interpolate(template, params)
    }
}

/// Replace each `{name}` in `template` with its value from `params`.
/// Unknown placeholders are left as they are.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_english_text() {
        for key in MessageKey::ALL {
            assert!(english::phrase(key).is_some(), "missing english for {}", key);
        }
    }

    #[test]
    fn test_every_key_has_hindi_text() {
        for key in MessageKey::ALL {
            assert!(hindi::phrase(key).is_some(), "missing hindi for {}", key);
        }
    }

    #[test]
    fn test_location_placeholder_filled() {
        let text = Catalog.translate(
            Language::English,
            MessageKey::ShoppingAiResponseWithLocation,
            &[("location", "28.6139, 77.2090")],
        );
        assert!(text.contains("28.6139, 77.2090"));
        assert!(!text.contains("{location}"));
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("near {location}", &[("city", "Pune")]), "near {location}");
        assert_eq!(interpolate("near {location}", &[("location", "Pune")]), "near Pune");
    }

    #[test]
    fn test_languages_differ() {
        let en = Catalog.text(Language::English, MessageKey::WelcomeMessage);
        let hi = Catalog.text(Language::Hindi, MessageKey::WelcomeMessage);
        assert_ne!(en, hi);
    }
}
