//! External synthesizer speech engine
//!
//! Runs one synthesizer process per utterance (espeak-ng compatible
//! flags) and kills it when the utterance is cancelled.

use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;

use sahayak::{SpeechEngine, Utterance, UtteranceObserver};

use super::PlaybackSlot;

pub const DEFAULT_SPEECH_PROGRAM: &str = "espeak-ng";

/// espeak-ng speed at rate 1.0, in words per minute
const BASE_WORDS_PER_MINUTE: f32 = 175.0;
/// espeak-ng pitch at pitch 1.0 (scale 0-99)
const BASE_PITCH: f32 = 50.0;

pub struct CommandSpeechEngine {
    program: String,
    slot: PlaybackSlot,
}

impl CommandSpeechEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            slot: PlaybackSlot::default(),
        }
    }

    /// Command-line arguments for one utterance
    pub fn args(utterance: &Utterance) -> Vec<String> {
        let words_per_minute = (BASE_WORDS_PER_MINUTE * utterance.rate).round() as u32;
        let pitch = (BASE_PITCH * utterance.pitch).round().clamp(0.0, 99.0) as u32;
        vec![
            "-v".to_string(),
            voice_for(&utterance.language),
            "-s".to_string(),
            words_per_minute.to_string(),
            "-p".to_string(),
            pitch.to_string(),
            utterance.text.clone(),
        ]
    }
}

/// espeak-ng voice names are lowercase; Hindi has no regional variant
fn voice_for(language: &str) -> String {
    let tag = language.to_lowercase();
    match tag.split('-').next() {
        Some("hi") => "hi".to_string(),
        _ => tag,
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn speak(&self, utterance: Utterance, observer: Arc<dyn UtteranceObserver>) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            observer.failed("no async runtime available for playback");
            return;
        };

        let token = self.slot.replace();
        let program = self.program.clone();
        let args = Self::args(&utterance);

        handle.spawn(async move {
            let mut child = match Command::new(&program)
                .args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .spawn()
            {
                Ok(child) => child,
                Err(e) => {
                    observer.failed(&format!("failed to start {}: {}", program, e));
                    return;
                }
            };

            tracing::debug!(utterance = utterance.id, %program, "Synthesizer started");
            observer.started();

            tokio::select! {
                _ = token.cancelled() => {
                    if let Err(e) = child.kill().await {
                        tracing::debug!(error = %e, "Synthesizer already exited");
                    }
                    observer.finished();
                }
                status = child.wait() => match status {
                    Ok(status) if status.success() => observer.finished(),
                    Ok(status) => observer.failed(&format!("{} exited with {}", program, status)),
                    Err(e) => observer.failed(&format!("failed to wait for {}: {}", program, e)),
                },
            }
        });
    }

    fn cancel(&self) {
        self.slot.cancel();
    }
}
