//! Persistence of the cached session record
//!
//! A [`SessionStorage`] is scoped to one browsing session (one tab). It
//! holds string values under string keys; the session store keeps a single
//! serialized user record in it.

use async_trait::async_trait;

use crate::error::SessionResult;

pub mod memory;
pub mod redis;

pub use self::memory::MemoryStorage;
pub use self::redis::{RedisConfig, RedisStorage};

/// Tab-scoped key/value persistence
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Delete a value; deleting a missing key is not an error
    async fn remove(&self, key: &str) -> SessionResult<()>;
}
