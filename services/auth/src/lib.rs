//! Session layer for the MOT Club client
//!
//! [`SessionStore`] keeps the authenticated user for one tab, persists it
//! through a [`SessionStorage`] backend and drives navigation on login and
//! logout.
//!
//! ```no_run
//! use std::sync::Arc;
//! use auth::{ChannelNavigator, MemoryStorage, SessionConfig, SessionStore};
//! use client::ApiClient;
//!
//! # async fn run() -> common::ClientResult<()> {
//! let api = ApiClient::from_env()?;
//! let (navigator, _routes) = ChannelNavigator::new();
//! let store = SessionStore::new(
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(navigator),
//!     Arc::new(api.auth.clone()),
//!     SessionConfig::default(),
//! );
//! store.init().await;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod navigation;
pub mod notifier;
pub mod session;
pub mod storage;

pub use error::{SessionError, SessionResult};
pub use navigation::{ChannelNavigator, Navigator};
pub use notifier::LogoutNotifier;
pub use session::{AuthState, SessionConfig, SessionStatus, SessionStore};
pub use storage::{MemoryStorage, RedisConfig, RedisStorage, SessionStorage};
