//! App Controller
//!
//! Top-level owner of the session, the conversation and speech output.
//! Views talk to this instead of reaching for shared globals; every
//! conversation or speech operation is gated on a signed-in user.

use sahayak::{
    DomainError, EmergencyContact, Language, Mode, SessionStore, SignupData, User,
    UserRepository,
};

use super::{ConversationController, SessionManager, SpeechOutput};

pub struct AppController<R: UserRepository, S: SessionStore> {
    session: SessionManager<R, S>,
    conversation: ConversationController,
    speech: SpeechOutput,
}

impl<R: UserRepository, S: SessionStore> AppController<R, S> {
    pub fn new(
        session: SessionManager<R, S>,
        conversation: ConversationController,
        speech: SpeechOutput,
    ) -> Self {
        Self {
            session,
            conversation,
            speech,
        }
    }

    pub fn session(&self) -> &SessionManager<R, S> {
        &self.session
    }

    pub fn conversation(&self) -> &ConversationController {
        &self.conversation
    }

    pub fn speech(&self) -> &SpeechOutput {
        &self.speech
    }

    /// Restore a persisted session and greet a returning user
    pub async fn start(&self) -> Result<Option<User>, DomainError> {
        let user = self.session.restore().await?;
        if user.is_some() {
            self.conversation.greet().await;
        }
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = self.session.login(email, password).await?;
        self.conversation.greet().await;
        Ok(user)
    }

    pub async fn signup(&self, data: SignupData) -> Result<User, DomainError> {
        let user = self.session.signup(data).await?;
        self.conversation.greet().await;
        Ok(user)
    }

    pub async fn continue_as_guest(&self) -> Result<User, DomainError> {
        let user = self.session.continue_as_guest().await?;
        self.conversation.greet().await;
        Ok(user)
    }

    /// Sign out, then silence speech and clear the conversation.
    /// A failed sign-out leaves everything as it was.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.session.logout().await?;
        self.speech.stop();
        self.conversation.reset().await;
        Ok(())
    }

    async fn require_user(&self) -> Result<User, DomainError> {
        self.session
            .current_user()
            .await
            .ok_or(DomainError::NotAuthenticated)
    }

    pub async fn select_mode(&self, mode: Mode) -> Result<(), DomainError> {
        self.require_user().await?;
        self.conversation.select_mode(mode).await;
        Ok(())
    }

    pub async fn go_home(&self) -> Result<(), DomainError> {
        self.require_user().await?;
        self.conversation.go_home().await;
        Ok(())
    }

    /// Press the microphone. Returns whether it is now listening.
    pub async fn toggle_listening(&self) -> Result<bool, DomainError> {
        self.require_user().await?;
        Ok(self.conversation.toggle_listening().await)
    }

    pub async fn set_language(&self, language: Language) -> Result<(), DomainError> {
        self.require_user().await?;
        self.conversation.set_language(language).await;
        Ok(())
    }

    /// Read one transcript line aloud in the active language
    pub async fn speak_entry(&self, index: usize) -> Result<u64, DomainError> {
        self.require_user().await?;
        let snapshot = self.conversation.snapshot().await;
        let entry = snapshot
            .transcript
            .get(index)
            .ok_or_else(|| DomainError::not_found("TranscriptEntry", &index.to_string()))?;
        Ok(self.speech.speak(&entry.text, snapshot.language))
    }

    /// Read the most recent assistant line aloud
    pub async fn speak_latest(&self) -> Result<u64, DomainError> {
        self.require_user().await?;
        let snapshot = self.conversation.snapshot().await;
        let entry = snapshot
            .transcript
            .iter()
            .rev()
            .find(|e| !e.is_user)
            .ok_or_else(|| DomainError::not_found("TranscriptEntry", "latest"))?;
        Ok(self.speech.speak(&entry.text, snapshot.language))
    }

    pub fn stop_speaking(&self) {
        self.speech.stop();
    }

    /// Who to call in an emergency: the user's own contact, else the default
    pub async fn emergency_contact(&self) -> Result<EmergencyContact, DomainError> {
        let user = self.require_user().await?;
        Ok(user
            .emergency_contact
            .unwrap_or_else(EmergencyContact::fallback))
    }
}
