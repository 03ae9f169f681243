//! Speech Engine Implementations
//!
//! - `ConsoleSpeechEngine`: prints the line and simulates playback time
//! - `CommandSpeechEngine`: drives an external synthesizer such as `espeak-ng`
//! - `RecordingSpeechEngine`: records utterances and lets callers drive
//!   the per-utterance callbacks by hand

mod command;
mod console;
mod recording;

pub use command::{CommandSpeechEngine, DEFAULT_SPEECH_PROGRAM};
pub use console::ConsoleSpeechEngine;
pub use recording::RecordingSpeechEngine;

use std::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

/// Playback slot shared by the engines that run one utterance at a time
#[derive(Debug, Default)]
struct PlaybackSlot {
    active: Mutex<Option<CancellationToken>>,
}

impl PlaybackSlot {
    fn guard(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cancel whatever is playing and claim the slot for a new utterance
    fn replace(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.guard().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    fn cancel(&self) {
        if let Some(previous) = self.guard().take() {
            previous.cancel();
        }
    }
}
