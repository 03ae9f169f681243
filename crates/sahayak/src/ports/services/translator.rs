//! Translator Port
//!
//! String lookup for every phrase the assistant shows or says.

use crate::domain::{Language, MessageKey};

pub trait Translator: Send + Sync {
    /// Look up `key` in `language`, substituting `{name}` placeholders from `params`
    fn translate(&self, language: Language, key: MessageKey, params: &[(&str, &str)]) -> String;

    fn text(&self, language: Language, key: MessageKey) -> String {
        self.translate(language, key, &[])
    }
}
