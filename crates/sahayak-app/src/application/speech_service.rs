//! Speech Output (Use Case)
//!
//! Serializes text-to-speech: at most one utterance is in flight, and a new
//! `speak` always pre-empts the previous one. The speaking flag follows the
//! engine's start/end/error callbacks for the current utterance only.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use sahayak::{DomainError, Language, SpeechEngine, Utterance, UtteranceObserver};

/// No utterance is current
const IDLE: u64 = 0;
/// Low bit of the packed playback word
const SPEAKING: u64 = 1;

/// Playback word: `id << 1 | speaking`. Id and flag always change together.
#[derive(Debug, Default)]
struct SpeechState {
    playback: AtomicU64,
    next_id: AtomicU64,
}

impl SpeechState {
    fn current(&self) -> u64 {
        self.playback.load(Ordering::SeqCst) >> 1
    }

    fn is_speaking(&self) -> bool {
        self.playback.load(Ordering::SeqCst) & SPEAKING != 0
    }
}

/// Callbacks for one utterance; ignored once a newer utterance has replaced it
struct UtteranceTracker {
    id: u64,
    state: Arc<SpeechState>,
}

impl UtteranceTracker {
    /// Clear the playback word, but only while it still belongs to this utterance
    fn settle(&self) {
        let _ = self
            .state
            .playback
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |word| {
                (word >> 1 == self.id).then_some(IDLE)
            });
    }
}

impl UtteranceObserver for UtteranceTracker {
    fn started(&self) {
        let queued = self.id << 1;
        let _ = self.state.playback.compare_exchange(
            queued,
            queued | SPEAKING,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }

    fn finished(&self) {
        tracing::debug!(utterance = self.id, "Utterance finished");
        self.settle();
    }

    fn failed(&self, reason: &str) {
        let error = DomainError::SpeechSynthesis(reason.to_string());
        tracing::warn!(utterance = self.id, %error, "Utterance failed");
        self.settle();
    }
}

/// Text-to-speech front end over a [`SpeechEngine`]
#[derive(Clone)]
pub struct SpeechOutput {
    engine: Arc<dyn SpeechEngine>,
    state: Arc<SpeechState>,
}

impl SpeechOutput {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            state: Arc::new(SpeechState::default()),
        }
    }

    /// Speak `text`, cutting off anything still playing. Returns the utterance id.
    pub fn speak(&self, text: &str, language: Language) -> u64 {
        self.stop();

        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.playback.store(id << 1, Ordering::SeqCst);

        tracing::debug!(utterance = id, language = language.speech_tag(), "Speaking");

        let tracker = Arc::new(UtteranceTracker {
            id,
            state: self.state.clone(),
        });
        self.engine
            .speak(Utterance::new(id, text, language.speech_tag()), tracker);
        id
    }

    /// Cancel the current utterance and clear the speaking flag
    pub fn stop(&self) {
        self.engine.cancel();
        self.state.playback.store(IDLE, Ordering::SeqCst);
    }

    pub fn is_speaking(&self) -> bool {
        self.state.is_speaking()
    }

    /// Id of the utterance in flight, if any
    pub fn current_utterance(&self) -> Option<u64> {
        match self.state.current() {
            IDLE => None,
            id => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingSpeechEngine;
    use sahayak::ports::{SPEECH_PITCH, SPEECH_RATE};

    fn output() -> (SpeechOutput, Arc<RecordingSpeechEngine>) {
        let engine = Arc::new(RecordingSpeechEngine::new());
        (SpeechOutput::new(engine.clone()), engine)
    }

    #[test]
    fn test_speak_uses_fixed_rate_and_pitch() {
        let (speech, engine) = output();
        speech.speak("Namaste", Language::Hindi);

        let spoken = engine.spoken();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "Namaste");
        assert_eq!(spoken[0].language, "hi-IN");
        assert_eq!(spoken[0].rate, SPEECH_RATE);
        assert_eq!(spoken[0].pitch, SPEECH_PITCH);
        assert!(speech.is_speaking());
    }

    #[test]
    fn test_flag_follows_natural_completion() {
        let (speech, engine) = output();
        speech.speak("hello", Language::English);
        assert!(speech.is_speaking());

        engine.finish(0);
        assert!(!speech.is_speaking());
        assert_eq!(speech.current_utterance(), None);
    }

    #[test]
    fn test_second_speak_preempts_first() {
        let (speech, engine) = output();
        let first = speech.speak("first", Language::English);
        let second = speech.speak("second", Language::English);

        assert_ne!(first, second);
        assert_eq!(engine.cancel_count(), 2);
        assert_eq!(engine.active().map(|u| u.text), Some("second".to_string()));
        assert_eq!(speech.current_utterance(), Some(second));
        assert!(speech.is_speaking());

        // A late completion of the pre-empted utterance changes nothing
        engine.finish(0);
        assert!(speech.is_speaking());

        engine.finish(1);
        assert!(!speech.is_speaking());
    }

    #[test]
    fn test_error_resets_flag_without_surfacing() {
        let (speech, engine) = output();
        speech.speak("hello", Language::English);
        engine.fail(0, "audio device lost");
        assert!(!speech.is_speaking());
    }

    #[test]
    fn test_stop_clears_flag() {
        let (speech, engine) = output();
        speech.speak("hello", Language::English);
        speech.stop();
        assert!(!speech.is_speaking());
        assert!(engine.active().is_none());

        // Start arriving after stop belongs to a stale utterance
        engine.start(0);
        assert!(!speech.is_speaking());
    }

    #[test]
    fn test_stale_callbacks_from_other_threads_leave_flag_alone() {
        let engine = Arc::new(RecordingSpeechEngine::manual());
        let speech = SpeechOutput::new(engine.clone());

        speech.speak("old", Language::English);
        let fresh = speech.speak("new", Language::English);
        engine.start(1);
        assert!(speech.is_speaking());

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        engine.start(0);
                        engine.finish(0);
                        engine.fail(0, "late");
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert!(speech.is_speaking());
        assert_eq!(speech.current_utterance(), Some(fresh));

        engine.finish(1);
        assert!(!speech.is_speaking());
        assert_eq!(speech.current_utterance(), None);
    }

    #[test]
    fn test_flag_waits_for_engine_start() {
        let engine = Arc::new(RecordingSpeechEngine::manual());
        let speech = SpeechOutput::new(engine.clone());

        speech.speak("hello", Language::English);
        assert!(!speech.is_speaking());

        engine.start(0);
        assert!(speech.is_speaking());
    }
}
