//! Conversation Application Service (Use Case)
//!
//! Owns the active mode, the transcript, the avatar mood and the listening
//! flag. Voice recognition is scripted: starting to listen spawns an
//! exchange task that, after fixed delays, appends a canned user line and
//! then a canned assistant reply for the current mode.
//!
//! Each exchange carries a [`CancellationToken`]. Changing mode, going
//! home, greeting, resetting or toggling listening again cancels it, and a
//! cancelled exchange never writes to the state again.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio_util::sync::CancellationToken;

use sahayak::{
    AvatarMood, Language, LocationProvider, MessageKey, Mode, TranscriptEntry, Translator,
};

const EVENT_CAPACITY: usize = 64;

/// Conversation controller configuration
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// How long the simulated recognition window stays open
    pub recognition_delay: Duration,
    /// Pause between the user line and the assistant reply
    pub response_delay: Duration,
    pub language: Language,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            recognition_delay: Duration::from_millis(2000),
            response_delay: Duration::from_millis(1000),
            language: Language::default(),
        }
    }
}

/// Conversation state changes, for whoever renders them
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEvent {
    ModeChanged(Mode),
    /// The transcript was replaced wholesale
    TranscriptReset(Vec<TranscriptEntry>),
    EntryAppended(TranscriptEntry),
    MoodChanged(AvatarMood),
    ListeningChanged(bool),
}

/// Owned copy of the conversation state
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSnapshot {
    pub mode: Mode,
    pub mood: AvatarMood,
    pub listening: bool,
    pub language: Language,
    pub transcript: Vec<TranscriptEntry>,
}

#[derive(Debug)]
struct ConversationState {
    mode: Mode,
    mood: AvatarMood,
    listening: bool,
    language: Language,
    transcript: Vec<TranscriptEntry>,
    exchange: Option<CancellationToken>,
}

struct Inner {
    state: Mutex<ConversationState>,
    translator: Arc<dyn Translator>,
    location: Arc<dyn LocationProvider>,
    config: ConversationConfig,
    events: broadcast::Sender<ConversationEvent>,
}

impl Inner {
    fn emit(&self, event: ConversationEvent) {
        let _ = self.events.send(event);
    }

    fn set_mood(&self, state: &mut ConversationState, mood: AvatarMood) {
        if state.mood != mood {
            state.mood = mood;
            self.emit(ConversationEvent::MoodChanged(mood));
        }
    }

    fn set_listening(&self, state: &mut ConversationState, listening: bool) {
        if state.listening != listening {
            state.listening = listening;
            self.emit(ConversationEvent::ListeningChanged(listening));
        }
    }

    fn set_mode(&self, state: &mut ConversationState, mode: Mode) {
        if state.mode != mode {
            state.mode = mode;
            tracing::info!(%mode, "Mode changed");
            self.emit(ConversationEvent::ModeChanged(mode));
        }
    }

    fn replace_transcript(&self, state: &mut ConversationState, entries: Vec<TranscriptEntry>) {
        state.transcript = entries;
        self.emit(ConversationEvent::TranscriptReset(state.transcript.clone()));
    }

    fn append(&self, state: &mut ConversationState, entry: TranscriptEntry) {
        state.transcript.push(entry.clone());
        self.emit(ConversationEvent::EntryAppended(entry));
    }

    fn cancel_exchange(&self, state: &mut ConversationState) {
        if let Some(token) = state.exchange.take() {
            tracing::debug!("Cancelling pending exchange");
            token.cancel();
        }
    }

    /// Leave the current screen: stop any exchange and close the microphone
    fn interrupt(&self, state: &mut ConversationState) {
        self.cancel_exchange(state);
        self.set_listening(state, false);
    }

    fn line(&self, state: &ConversationState, key: MessageKey) -> TranscriptEntry {
        TranscriptEntry::assistant(self.translator.text(state.language, key))
    }

    fn reply_text(&self, mode: Mode, language: Language) -> String {
        if mode != Mode::Shopping {
            return self.translator.text(language, mode.reply_key(false));
        }

        match self.location.current_location() {
            Some(fix) => {
                let coordinates = fix.to_string();
                self.translator.translate(
                    language,
                    mode.reply_key(true),
                    &[("location", coordinates.as_str())],
                )
            }
            None => self.translator.text(language, mode.reply_key(false)),
        }
    }
}

/// Mode and transcript controller
#[derive(Clone)]
pub struct ConversationController {
    inner: Arc<Inner>,
}

impl ConversationController {
    pub fn new(
        translator: Arc<dyn Translator>,
        location: Arc<dyn LocationProvider>,
        config: ConversationConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let state = ConversationState {
            mode: Mode::Home,
            mood: AvatarMood::Neutral,
            listening: false,
            language: config.language,
            transcript: Vec::new(),
            exchange: None,
        };
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                translator,
                location,
                config,
                events,
            }),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.inner.events.subscribe()
    }

    pub async fn snapshot(&self) -> ConversationSnapshot {
        let state = self.inner.state.lock().await;
        ConversationSnapshot {
            mode: state.mode,
            mood: state.mood,
            listening: state.listening,
            language: state.language,
            transcript: state.transcript.clone(),
        }
    }

    pub async fn mode(&self) -> Mode {
        self.inner.state.lock().await.mode
    }

    pub async fn mood(&self) -> AvatarMood {
        self.inner.state.lock().await.mood
    }

    pub async fn is_listening(&self) -> bool {
        self.inner.state.lock().await.listening
    }

    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.inner.state.lock().await.transcript.clone()
    }

    pub async fn language(&self) -> Language {
        self.inner.state.lock().await.language
    }

    /// Switch language for lines produced from now on
    pub async fn set_language(&self, language: Language) {
        self.inner.state.lock().await.language = language;
    }

    /// Show the opening welcome line, as after signing in
    pub async fn greet(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock().await;
        inner.interrupt(&mut state);
        let welcome = inner.line(&state, MessageKey::WelcomeMessage);
        inner.replace_transcript(&mut state, vec![welcome]);
        inner.set_mood(&mut state, AvatarMood::Happy);
    }

    /// Enter `mode` with a fresh transcript holding its welcome line
    pub async fn select_mode(&self, mode: Mode) {
        let inner = &self.inner;
        let mut state = inner.state.lock().await;
        inner.interrupt(&mut state);
        inner.set_mode(&mut state, mode);
        inner.set_mood(&mut state, mode.mood());
        let welcome = inner.line(&state, mode.welcome_key());
        inner.replace_transcript(&mut state, vec![welcome]);
    }

    /// Return to the home screen
    pub async fn go_home(&self) {
        self.select_mode(Mode::Home).await;
    }

    /// Back to the initial state: home, neutral, empty transcript
    pub async fn reset(&self) {
        let inner = &self.inner;
        let mut state = inner.state.lock().await;
        inner.interrupt(&mut state);
        inner.set_mode(&mut state, Mode::Home);
        inner.set_mood(&mut state, AvatarMood::Neutral);
        inner.replace_transcript(&mut state, Vec::new());
    }

    /// Open or close the microphone. Returns whether it is now listening.
    pub async fn toggle_listening(&self) -> bool {
        let inner = &self.inner;
        let mut state = inner.state.lock().await;
        inner.cancel_exchange(&mut state);

        if state.listening {
            inner.set_listening(&mut state, false);
            inner.set_mood(&mut state, AvatarMood::Neutral);
            return false;
        }

        inner.set_listening(&mut state, true);
        inner.set_mood(&mut state, AvatarMood::Thinking);

        let token = CancellationToken::new();
        state.exchange = Some(token.clone());
        tokio::spawn(run_exchange(inner.clone(), token, state.mode));
        true
    }
}

/// The scripted recognition-and-reply sequence for one microphone press
async fn run_exchange(inner: Arc<Inner>, token: CancellationToken, mode: Mode) {
    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(inner.config.recognition_delay) => {}
    }

    {
        let mut state = inner.state.lock().await;
        if token.is_cancelled() {
            return;
        }
        inner.set_listening(&mut state, false);
        let query = inner
            .translator
            .text(state.language, mode.user_query_key());
        tracing::debug!(%mode, "Recognized scripted query");
        inner.append(&mut state, TranscriptEntry::user(query));
        inner.set_mood(&mut state, mode.mood());
    }

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(inner.config.response_delay) => {}
    }

    let mut state = inner.state.lock().await;
    if token.is_cancelled() {
        return;
    }
    let reply = inner.reply_text(mode, state.language);
    tracing::debug!(%mode, "Answering scripted query");
    inner.append(&mut state, TranscriptEntry::assistant(reply));
    state.exchange = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ManualLocation;
    use sahayak::{Catalog, GeoLocation};

    fn controller_with(location: Arc<ManualLocation>) -> ConversationController {
        ConversationController::new(
            Arc::new(Catalog::new()),
            location,
            ConversationConfig::default(),
        )
    }

    fn controller() -> ConversationController {
        controller_with(Arc::new(ManualLocation::unavailable()))
    }

    fn text(key: MessageKey) -> String {
        Catalog.text(Language::English, key)
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test]
    async fn test_initial_state() {
        let snapshot = controller().snapshot().await;
        assert_eq!(snapshot.mode, Mode::Home);
        assert_eq!(snapshot.mood, AvatarMood::Neutral);
        assert!(!snapshot.listening);
        assert!(snapshot.transcript.is_empty());
    }

    #[tokio::test]
    async fn test_select_mode_yields_single_welcome_for_every_mode() {
        let conversation = controller();
        for mode in Mode::ALL {
            conversation.select_mode(mode).await;
            let snapshot = conversation.snapshot().await;
            assert_eq!(snapshot.mode, mode);
            assert_eq!(snapshot.mood, mode.mood());
            assert_eq!(snapshot.transcript.len(), 1);
            assert!(!snapshot.transcript[0].is_user);
            assert_eq!(snapshot.transcript[0].text, text(mode.welcome_key()));
        }
    }

    #[tokio::test]
    async fn test_go_home() {
        let conversation = controller();
        conversation.select_mode(Mode::Wellness).await;
        conversation.go_home().await;

        let snapshot = conversation.snapshot().await;
        assert_eq!(snapshot.mode, Mode::Home);
        assert_eq!(snapshot.mood, AvatarMood::Happy);
        assert_eq!(snapshot.transcript.len(), 1);
        assert_eq!(snapshot.transcript[0].text, text(MessageKey::BackToHome));
    }

    #[tokio::test]
    async fn test_greet_shows_welcome() {
        let conversation = controller();
        conversation.greet().await;

        let snapshot = conversation.snapshot().await;
        assert_eq!(snapshot.mood, AvatarMood::Happy);
        assert_eq!(snapshot.transcript.len(), 1);
        assert_eq!(snapshot.transcript[0].text, text(MessageKey::WelcomeMessage));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_exchange_sequence() {
        let conversation = controller();
        conversation.select_mode(Mode::Religious).await;

        assert!(conversation.toggle_listening().await);
        assert!(conversation.is_listening().await);
        assert_eq!(conversation.mood().await, AvatarMood::Thinking);

        advance(1900).await;
        assert!(conversation.is_listening().await);
        assert_eq!(conversation.transcript().await.len(), 1);

        advance(200).await;
        let snapshot = conversation.snapshot().await;
        assert!(!snapshot.listening);
        assert_eq!(snapshot.transcript.len(), 2);
        assert!(snapshot.transcript[1].is_user);
        assert_eq!(snapshot.transcript[1].text, text(MessageKey::ReligiousUserQuery));
        assert_eq!(snapshot.mood, AvatarMood::Religious);

        advance(1000).await;
        let snapshot = conversation.snapshot().await;
        assert_eq!(snapshot.transcript.len(), 3);
        assert!(!snapshot.transcript[2].is_user);
        assert_eq!(snapshot.transcript[2].text, text(MessageKey::ReligiousAiResponse));
        assert_eq!(snapshot.mood, AvatarMood::Religious);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheme_and_home_moods_after_exchange() {
        let conversation = controller();

        conversation.select_mode(Mode::Scheme).await;
        conversation.toggle_listening().await;
        advance(3100).await;
        assert_eq!(conversation.mood().await, AvatarMood::Neutral);
        let transcript = conversation.transcript().await;
        assert_eq!(transcript[2].text, text(MessageKey::SchemeAiResponse));

        conversation.go_home().await;
        conversation.toggle_listening().await;
        advance(3100).await;
        assert_eq!(conversation.mood().await, AvatarMood::Happy);
        let transcript = conversation.transcript().await;
        assert_eq!(transcript[1].text, text(MessageKey::DefaultUserQuery));
        assert_eq!(transcript[2].text, text(MessageKey::DefaultAiResponse));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shopping_reply_with_location() {
        let location = Arc::new(ManualLocation::unavailable());
        let conversation = controller_with(location.clone());
        conversation.select_mode(Mode::Shopping).await;
        conversation.toggle_listening().await;

        // The fix only arrives after the user line, before the reply
        advance(2500).await;
        location.set(Some(GeoLocation::new(12.971_598_7, 77.594_562_7)));
        advance(600).await;

        let transcript = conversation.transcript().await;
        assert_eq!(transcript.len(), 3);
        assert!(transcript[2].text.contains("12.9716, 77.5946"));
        assert_eq!(conversation.mood().await, AvatarMood::Shopping);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shopping_reply_without_location() {
        let conversation = controller();
        conversation.select_mode(Mode::Shopping).await;
        conversation.toggle_listening().await;
        advance(3100).await;

        let transcript = conversation.transcript().await;
        assert_eq!(
            transcript[2].text,
            text(MessageKey::ShoppingAiResponseNoLocation)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_off_cancels_exchange() {
        let conversation = controller();
        conversation.select_mode(Mode::Wellness).await;

        assert!(conversation.toggle_listening().await);
        advance(500).await;
        assert!(!conversation.toggle_listening().await);
        assert_eq!(conversation.mood().await, AvatarMood::Neutral);

        advance(5000).await;
        let snapshot = conversation.snapshot().await;
        assert!(!snapshot.listening);
        assert_eq!(snapshot.transcript.len(), 1);
        assert_eq!(snapshot.mood, AvatarMood::Neutral);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mode_change_drops_pending_reply() {
        let conversation = controller();
        conversation.select_mode(Mode::Wellness).await;
        conversation.toggle_listening().await;

        // User line is in, reply still pending
        advance(2500).await;
        assert_eq!(conversation.transcript().await.len(), 2);

        conversation.select_mode(Mode::Scheme).await;
        advance(5000).await;

        let snapshot = conversation.snapshot().await;
        assert_eq!(snapshot.mode, Mode::Scheme);
        assert_eq!(snapshot.mood, AvatarMood::Neutral);
        assert_eq!(snapshot.transcript.len(), 1);
        assert_eq!(snapshot.transcript[0].text, text(MessageKey::SchemeWelcome));
    }

    #[tokio::test(start_paused = true)]
    async fn test_relisten_during_pending_reply_restarts_script() {
        let conversation = controller();
        conversation.select_mode(Mode::Religious).await;
        conversation.toggle_listening().await;
        advance(2500).await;

        // Microphone pressed again before the reply arrived
        assert!(conversation.toggle_listening().await);
        advance(1000).await;
        assert_eq!(conversation.transcript().await.len(), 2);

        advance(2100).await;
        let transcript = conversation.transcript().await;
        assert_eq!(transcript.len(), 4);
        assert!(transcript[2].is_user);
        assert!(!transcript[3].is_user);
    }

    #[tokio::test(start_paused = true)]
    async fn test_language_applies_to_new_lines() {
        let conversation = controller();
        conversation.set_language(Language::Hindi).await;
        conversation.select_mode(Mode::Wellness).await;

        let transcript = conversation.transcript().await;
        assert_eq!(
            transcript[0].text,
            Catalog.text(Language::Hindi, MessageKey::WellnessWelcome)
        );
    }

    #[tokio::test]
    async fn test_reset_returns_to_initial_state() {
        let conversation = controller();
        conversation.select_mode(Mode::Shopping).await;
        conversation.toggle_listening().await;
        conversation.reset().await;

        let snapshot = conversation.snapshot().await;
        assert_eq!(snapshot.mode, Mode::Home);
        assert_eq!(snapshot.mood, AvatarMood::Neutral);
        assert!(!snapshot.listening);
        assert!(snapshot.transcript.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_for_exchange() {
        let conversation = controller();
        conversation.select_mode(Mode::Scheme).await;
        let mut events = conversation.subscribe();

        conversation.toggle_listening().await;
        advance(3100).await;

        let mut received = Vec::new();
        while let Ok(event) = events.try_recv() {
            received.push(event);
        }

        assert_eq!(received[0], ConversationEvent::ListeningChanged(true));
        assert_eq!(received[1], ConversationEvent::MoodChanged(AvatarMood::Thinking));
        assert_eq!(received[2], ConversationEvent::ListeningChanged(false));
        assert!(matches!(&received[3], ConversationEvent::EntryAppended(e) if e.is_user));
        assert_eq!(received[4], ConversationEvent::MoodChanged(AvatarMood::Neutral));
        assert!(matches!(&received[5], ConversationEvent::EntryAppended(e) if !e.is_user));
        assert_eq!(received.len(), 6);
    }
}
