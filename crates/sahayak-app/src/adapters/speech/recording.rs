//! Recording speech engine
//!
//! Keeps every utterance it is asked to speak, and hands the per-utterance
//! callbacks to the caller. Useful for driving speech output without audio.

use std::sync::{Arc, Mutex, MutexGuard};

use sahayak::{SpeechEngine, Utterance, UtteranceObserver};

#[derive(Default)]
struct Recording {
    spoken: Vec<(Utterance, Arc<dyn UtteranceObserver>)>,
    active: Option<usize>,
    cancels: usize,
}

pub struct RecordingSpeechEngine {
    /// Report `started` as soon as `speak` is called
    auto_start: bool,
    recording: Mutex<Recording>,
}

impl RecordingSpeechEngine {
    pub fn new() -> Self {
        Self {
            auto_start: true,
            recording: Mutex::new(Recording::default()),
        }
    }

    /// Engine that never reports progress on its own
    pub fn manual() -> Self {
        Self {
            auto_start: false,
            recording: Mutex::new(Recording::default()),
        }
    }

    fn recording(&self) -> MutexGuard<'_, Recording> {
        self.recording.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn observer(&self, index: usize) -> Option<Arc<dyn UtteranceObserver>> {
        self.recording()
            .spoken
            .get(index)
            .map(|(_, observer)| observer.clone())
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.recording()
            .spoken
            .iter()
            .map(|(utterance, _)| utterance.clone())
            .collect()
    }

    /// The utterance currently playing, if any
    pub fn active(&self) -> Option<Utterance> {
        let recording = self.recording();
        let index = recording.active?;
        let active = recording.spoken.get(index).map(|(utterance, _)| utterance.clone());
        active
    }

    pub fn cancel_count(&self) -> usize {
        self.recording().cancels
    }

    pub fn start(&self, index: usize) {
        if let Some(observer) = self.observer(index) {
            observer.started();
        }
    }

    /// Report natural completion of the `index`-th utterance
    pub fn finish(&self, index: usize) {
        {
            let mut recording = self.recording();
            if recording.active == Some(index) {
                recording.active = None;
            }
        }
        if let Some(observer) = self.observer(index) {
            observer.finished();
        }
    }

    pub fn fail(&self, index: usize, reason: &str) {
        {
            let mut recording = self.recording();
            if recording.active == Some(index) {
                recording.active = None;
            }
        }
        if let Some(observer) = self.observer(index) {
            observer.failed(reason);
        }
    }
}

impl Default for RecordingSpeechEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechEngine for RecordingSpeechEngine {
    fn speak(&self, utterance: Utterance, observer: Arc<dyn UtteranceObserver>) {
        {
            let mut recording = self.recording();
            recording.spoken.push((utterance, observer.clone()));
            recording.active = Some(recording.spoken.len() - 1);
        }
        if self.auto_start {
            observer.started();
        }
    }

    /// Cancelling reports `finished` for the interrupted utterance,
    /// as browser engines do
    fn cancel(&self) {
        let interrupted = {
            let mut recording = self.recording();
            recording.cancels += 1;
            let index = recording.active.take();
            let observer = index
                .and_then(|i| recording.spoken.get(i))
                .map(|(_, observer)| observer.clone());
            observer
        };
        if let Some(observer) = interrupted {
            observer.finished();
        }
    }
}
