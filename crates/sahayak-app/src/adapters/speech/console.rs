//! Console "speech": prints each utterance and holds the speaking state
//! for roughly as long as reading it aloud would take.

use std::sync::Arc;
use std::time::Duration;

use sahayak::{SpeechEngine, Utterance, UtteranceObserver};

use super::PlaybackSlot;

const DEFAULT_WORD_DURATION: Duration = Duration::from_millis(320);

pub struct ConsoleSpeechEngine {
    word_duration: Duration,
    slot: PlaybackSlot,
}

impl ConsoleSpeechEngine {
    pub fn new() -> Self {
        Self::with_word_duration(DEFAULT_WORD_DURATION)
    }

    /// Playback time per word at rate 1.0
    pub fn with_word_duration(word_duration: Duration) -> Self {
        Self {
            word_duration,
            slot: PlaybackSlot::default(),
        }
    }

    fn playback_time(&self, utterance: &Utterance) -> Duration {
        let words = utterance.text.split_whitespace().count().max(1) as f64;
        let rate = if utterance.rate > 0.0 { utterance.rate as f64 } else { 1.0 };
        self.word_duration.mul_f64(words / rate)
    }
}

impl Default for ConsoleSpeechEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechEngine for ConsoleSpeechEngine {
    fn speak(&self, utterance: Utterance, observer: Arc<dyn UtteranceObserver>) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            observer.failed("no async runtime available for playback");
            return;
        };

        let token = self.slot.replace();
        let duration = self.playback_time(&utterance);

        println!("🔊 [{}] {}", utterance.language, utterance.text);
        observer.started();

        handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(duration) => {}
            }
            observer.finished();
        });
    }

    fn cancel(&self) {
        self.slot.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counts {
        started: AtomicUsize,
        finished: AtomicUsize,
        failed: AtomicUsize,
    }

    impl UtteranceObserver for Counts {
        fn started(&self) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }
        fn finished(&self) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
        fn failed(&self, _reason: &str) {
            self.failed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_playback_time_scales_with_words_and_rate() {
        let engine = ConsoleSpeechEngine::with_word_duration(Duration::from_millis(90));
        let utterance = Utterance::new(1, "one two three", "en-US");
        let time = engine.playback_time(&utterance);
        assert!(time > Duration::from_millis(299) && time < Duration::from_millis(301));

        let mut normal = utterance.clone();
        normal.rate = 1.0;
        let time = engine.playback_time(&normal);
        assert!(time > Duration::from_millis(269) && time < Duration::from_millis(271));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finishes_after_playback_time() {
        let engine = ConsoleSpeechEngine::with_word_duration(Duration::from_millis(100));
        let counts = Arc::new(Counts::default());

        engine.speak(Utterance::new(1, "hello there", "en-US"), counts.clone());
        assert_eq!(counts.started.load(Ordering::SeqCst), 1);
        assert_eq!(counts.finished.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(counts.finished.load(Ordering::SeqCst), 1);
        assert_eq!(counts.failed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_ends_playback_early() {
        let engine = ConsoleSpeechEngine::with_word_duration(Duration::from_secs(10));
        let counts = Arc::new(Counts::default());

        engine.speak(Utterance::new(1, "a long sentence", "en-US"), counts.clone());
        engine.cancel();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(counts.finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_without_runtime_reports_failure() {
        let engine = ConsoleSpeechEngine::new();
        let counts = Arc::new(Counts::default());
        engine.speak(Utterance::new(1, "hello", "en-US"), counts.clone());
        assert_eq!(counts.failed.load(Ordering::SeqCst), 1);
        assert_eq!(counts.started.load(Ordering::SeqCst), 0);
    }
}
