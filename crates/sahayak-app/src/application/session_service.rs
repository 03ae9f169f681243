//! Session Application Service (Use Case)
//!
//! Holds the single current user. Login and signup go through the account
//! store after a simulated network delay; the current user is mirrored into
//! the session store so it survives a restart.

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};

use sahayak::{
    DomainError, SessionStore, SignupData, User, UserRepository, SESSION_USER_KEY,
};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 7;
const EVENT_CAPACITY: usize = 16;

/// Session manager configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Simulated round trip for login and signup
    pub network_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            network_latency: Duration::from_millis(1000),
        }
    }
}

/// Authentication state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(User),
    SignedOut,
}

#[derive(Debug)]
struct SessionState {
    user: Option<User>,
    restoring: bool,
}

/// Counts one in-flight login or signup until dropped
struct PendingCall<'a>(&'a AtomicUsize);

impl<'a> PendingCall<'a> {
    fn begin(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for PendingCall<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Application service for the signed-in user
pub struct SessionManager<R: UserRepository, S: SessionStore> {
    users: Arc<R>,
    store: Arc<S>,
    config: SessionConfig,
    state: RwLock<SessionState>,
    pending: AtomicUsize,
    events: broadcast::Sender<SessionEvent>,
}

impl<R: UserRepository, S: SessionStore> SessionManager<R, S> {
    /// Create a manager that is loading until [`restore`](Self::restore) runs
    pub fn new(users: Arc<R>, store: Arc<S>, config: SessionConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            users,
            store,
            config,
            state: RwLock::new(SessionState {
                user: None,
                restoring: true,
            }),
            pending: AtomicUsize::new(0),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    /// True until the first restore completes and while any login or signup is pending
    pub async fn is_loading(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0 || self.state.read().await.restoring
    }

    /// Pick up the user persisted by an earlier run.
    ///
    /// A stored record that cannot be decoded is discarded and the session
    /// starts logged out.
    pub async fn restore(&self) -> Result<Option<User>, DomainError> {
        let result = self.load_persisted().await;
        let mut state = self.state.write().await;
        state.restoring = false;

        let user = result?;
        if let Some(user) = &user {
            tracing::info!("Restored session for {} ({})", user.name, user.id);
            state.user = Some(user.clone());
            let _ = self.events.send(SessionEvent::SignedIn(user.clone()));
        }
        Ok(user)
    }

    async fn load_persisted(&self) -> Result<Option<User>, DomainError> {
        let decoded = match self.store.get(SESSION_USER_KEY).await {
            Ok(Some(raw)) => decode_user(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };

        match decoded {
            Err(DomainError::MalformedPersistedState(reason)) => {
                tracing::warn!(%reason, "Discarding malformed persisted session");
                if let Err(e) = self.store.remove(SESSION_USER_KEY).await {
                    tracing::warn!(error = %e, "Failed to clear malformed session");
                }
                Ok(None)
            }
            other => other,
        }
    }

    /// Check credentials against the account store.
    /// On mismatch the current user is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let _pending = PendingCall::begin(&self.pending);
        tokio::time::sleep(self.config.network_latency).await;

        let user = self
            .users
            .find_by_credentials(email, password)
            .await?
            .ok_or_else(|| {
                tracing::info!("Login rejected for {}", email);
                DomainError::InvalidCredentials
            })?;

        self.sign_in(user).await
    }

    /// Create an account. Always succeeds unless storage fails; emails
    /// are not checked for uniqueness.
    pub async fn signup(&self, data: SignupData) -> Result<User, DomainError> {
        let _pending = PendingCall::begin(&self.pending);
        tokio::time::sleep(self.config.network_latency).await;

        let id = generate_user_id();
        let user = self.users.register(&id, &data).await?;
        self.sign_in(user).await
    }

    /// Sign in as the fixed guest user, without any delay
    pub async fn continue_as_guest(&self) -> Result<User, DomainError> {
        self.sign_in(User::guest()).await
    }

    /// Forget the current user, in the session store and then in memory.
    /// If the store cannot be cleared the user stays signed in.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.store.remove(SESSION_USER_KEY).await?;

        let previous = self.state.write().await.user.take();
        if let Some(user) = previous {
            tracing::info!("Signed out {} ({})", user.name, user.id);
        }
        let _ = self.events.send(SessionEvent::SignedOut);
        Ok(())
    }

    async fn sign_in(&self, user: User) -> Result<User, DomainError> {
        self.store
            .set(SESSION_USER_KEY, &encode_user(&user)?)
            .await?;

        self.state.write().await.user = Some(user.clone());
        tracing::info!("Signed in {} ({})", user.name, user.id);
        let _ = self.events.send(SessionEvent::SignedIn(user.clone()));
        Ok(user)
    }
}

/// Serialize a user into the persisted session layout
pub fn encode_user(user: &User) -> Result<String, DomainError> {
    serde_json::to_string(user)
        .map_err(|e| DomainError::Repository(format!("Failed to serialize user: {}", e)))
}

/// Parse a persisted session record
pub fn decode_user(raw: &str) -> Result<User, DomainError> {
    serde_json::from_str(raw).map_err(|e| DomainError::MalformedPersistedState(e.to_string()))
}

/// Seven random lowercase base-36 characters
fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
