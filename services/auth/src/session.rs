//! Session/auth store
//!
//! Holds the authenticated user for one tab. The store starts in the
//! loading state, settles into anonymous or authenticated after [`init`],
//! and changes only through [`login`] and [`logout`]. Consumers read the
//! current [`AuthState`] or subscribe to changes.
//!
//! Concurrent `login`/`logout` calls are not serialized: the last one to
//! write wins.
//!
//! [`init`]: SessionStore::init
//! [`login`]: SessionStore::login
//! [`logout`]: SessionStore::logout

use client::models::User;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{
    error::SessionResult, navigation::Navigator, notifier::LogoutNotifier,
    storage::SessionStorage,
};

/// Coarse session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The persisted record has not been consulted yet
    Loading,
    Anonymous,
    Authenticated,
}

/// Snapshot of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub is_logging_out: bool,
}

impl AuthState {
    fn initial() -> Self {
        Self {
            user: None,
            loading: true,
            is_logging_out: false,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match (&self.user, self.loading) {
            (_, true) => SessionStatus::Loading,
            (Some(_), false) => SessionStatus::Authenticated,
            (None, false) => SessionStatus::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }
}

/// Routes and storage key used by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key of the persisted user record
    pub storage_key: String,
    /// Route opened after login
    pub landing_route: String,
    /// Route opened after logout
    pub login_route: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
            landing_route: "/".to_string(),
            login_route: "/login".to_string(),
        }
    }
}

/// Authentication state holder for one tab
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<AuthState>>,
    storage: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn LogoutNotifier>,
    config: SessionConfig,
}

impl SessionStore {
    /// Create a store in the loading state
    pub fn new(
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn LogoutNotifier>,
        config: SessionConfig,
    ) -> Self {
        let (state, _) = watch::channel(AuthState::initial());

        Self {
            state: Arc::new(state),
            storage,
            navigator,
            notifier,
            config,
        }
    }

    /// Restore the persisted user, if any
    ///
    /// A record that does not parse is removed and the session starts
    /// anonymous. Always leaves the store out of the loading state.
    pub async fn init(&self) -> AuthState {
        let key = &self.config.storage_key;

        let user = match self.storage.get(key).await {
            Ok(Some(raw)) => match decode_record(&raw) {
                Ok(user) => {
                    info!("Restored session for user: {}", user.email);
                    Some(user)
                }
                Err(e) => {
                    warn!("Discarding corrupted session record: {}", e);
                    if let Err(e) = self.storage.remove(key).await {
                        error!("Failed to remove corrupted session record: {}", e);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Failed to read session record: {}", e);
                None
            }
        };

        self.state.send_modify(|state| {
            state.user = user;
            state.loading = false;
        });
        self.state()
    }

    /// Current snapshot
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Cached user, if authenticated
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Become authenticated as `user`
    ///
    /// Replaces any previous user, persists the record and opens the
    /// landing route. A persistence failure is logged; the in-memory
    /// session still holds the user.
    pub async fn login(&self, user: User) {
        info!("Creating session for user: {}", user.email);

        let persisted = match encode_record(&user) {
            Ok(record) => self.storage.set(&self.config.storage_key, &record).await,
            Err(e) => Err(e),
        };
        if let Err(e) = persisted {
            error!("Failed to persist session record: {}", e);
        }

        self.state.send_modify(|state| {
            state.user = Some(user);
            state.loading = false;
        });
        self.navigator.navigate(&self.config.landing_route);
    }

    /// End the session
    ///
    /// The backend is notified first on a best-effort basis; the local
    /// session is cleared whether or not that succeeds.
    pub async fn logout(&self) {
        info!("Deleting session");
        self.state.send_modify(|state| state.is_logging_out = true);

        if let Err(e) = self.notifier.notify_logout().await {
            warn!("Backend logout notification failed: {}", e);
        }

        if let Err(e) = self.storage.remove(&self.config.storage_key).await {
            error!("Failed to remove session record: {}", e);
        }

        self.state.send_modify(|state| {
            state.user = None;
            state.loading = false;
        });
        self.navigator.navigate(&self.config.login_route);
        self.state.send_modify(|state| state.is_logging_out = false);
    }
}

fn encode_record(user: &User) -> SessionResult<String> {
    Ok(serde_json::to_string(user)?)
}

fn decode_record(raw: &str) -> SessionResult<User> {
    Ok(serde_json::from_str(raw)?)
}
