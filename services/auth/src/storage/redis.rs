//! Redis-backed session storage
//!
//! Records live under `session:{tab_id}:{key}` and expire after a TTL, so
//! abandoned sessions clean themselves up.

use ::redis::{AsyncCommands, Client};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::SessionStorage;
use crate::error::{SessionError, SessionResult};

/// Configuration for the Redis session backend
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
    /// Lifetime of a session record in seconds
    pub ttl_seconds: u64,
}

impl RedisConfig {
    /// Create a new RedisConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REDIS_URL`: Redis connection URL (default: "redis://localhost:6379")
    /// - `SESSION_TTL_SECONDS`: record lifetime (default: 86400)
    pub fn from_env() -> Self {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let ttl_seconds = std::env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(86400);

        Self { url, ttl_seconds }
    }
}

/// Session storage for one tab, kept in Redis
#[derive(Clone)]
pub struct RedisStorage {
    client: Client,
    tab_id: Uuid,
    ttl_seconds: u64,
}

impl RedisStorage {
    /// Open storage for a new tab
    pub fn new(config: &RedisConfig) -> SessionResult<Self> {
        Self::for_tab(config, Uuid::new_v4())
    }

    /// Open storage for an existing tab
    pub fn for_tab(config: &RedisConfig, tab_id: Uuid) -> SessionResult<Self> {
        let client = Client::open(config.url.clone()).map_err(|e| {
            SessionError::Configuration(format!("Invalid Redis URL {}: {}", config.url, e))
        })?;
        info!("Redis session storage initialized for tab: {}", tab_id);

        Ok(Self {
            client,
            tab_id,
            ttl_seconds: config.ttl_seconds,
        })
    }

    pub fn tab_id(&self) -> Uuid {
        self.tab_id
    }

    fn record_key(&self, key: &str) -> String {
        format!("session:{}:{}", self.tab_id, key)
    }

    async fn connection(&self) -> SessionResult<::redis::aio::MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }

    /// Check if Redis is reachable
    pub async fn health_check(&self) -> SessionResult<bool> {
        let mut conn = self.connection().await?;
        let pong: String = ::redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong == "PONG")
    }
}

#[async_trait]
impl SessionStorage for RedisStorage {
    async fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(self.record_key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn
            .set_ex(self.record_key(key), value, self.ttl_seconds)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> SessionResult<()> {
        let mut conn = self.connection().await?;
        let _: u64 = conn.del(self.record_key(key)).await?;
        Ok(())
    }
}
