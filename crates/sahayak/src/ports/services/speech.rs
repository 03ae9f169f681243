//! Speech Engine Port
//!
//! Abstract interface over a platform text-to-speech engine.
//!
//! The engine owns playback; progress flows back only through the
//! [`UtteranceObserver`] handed over with each utterance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Speaking rate used for every utterance, a little slower than normal
pub const SPEECH_RATE: f32 = 0.9;

/// Default pitch
pub const SPEECH_PITCH: f32 = 1.0;

/// One line of text to vocalise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Utterance {
    /// Sequence number assigned by the speech output
    pub id: u64,
    pub text: String,
    /// BCP 47 language tag, e.g. `en-US`
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    pub fn new(id: u64, text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            language: language.into(),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
        }
    }
}

/// Per-utterance progress callbacks
pub trait UtteranceObserver: Send + Sync {
    fn started(&self);

    fn finished(&self);

    fn failed(&self, reason: &str);
}

/// Platform speech synthesis
///
/// # Example
///
/// ```rust,ignore
/// struct Espeak;
///
/// impl SpeechEngine for Espeak {
///     fn speak(&self, utterance: Utterance, observer: Arc<dyn UtteranceObserver>) {
///         // start playback, call observer.started(), later observer.finished()
///     }
///     fn cancel(&self) { /* stop playback */ }
/// }
/// ```
pub trait SpeechEngine: Send + Sync {
    /// Begin speaking. Must not block until playback ends.
    fn speak(&self, utterance: Utterance, observer: Arc<dyn UtteranceObserver>);

    /// Stop whatever is being spoken
    fn cancel(&self);
}
