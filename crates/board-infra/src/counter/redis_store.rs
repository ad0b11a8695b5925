//! Redis counter store with connection pooling.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use board_core::error::CounterError;
use board_core::ports::CounterStore;

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

/// Redis-backed counter store.
///
/// Uses connection manager for automatic reconnection and pooling. A failed
/// GET is reported as a miss so the like-count read-through can fall back
/// to the repository.
pub struct RedisCounterStore {
    conn: ConnectionManager,
}

impl RedisCounterStore {
    pub async fn new(config: RedisConfig) -> Result<Self, CounterError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| CounterError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn_manager_fut = ConnectionManager::new(client);
        let conn = tokio::time::timeout(config.connect_timeout, conn_manager_fut)
            .await
            .map_err(|_| CounterError::Connection("Connection timed out".to_string()))?
            .map_err(|e| CounterError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis counter store");

        Ok(Self { conn })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, CounterError> {
        Self::new(RedisConfig::from_env()).await
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn get(&self, key: &str) -> Option<i64> {
        let mut conn = self.conn.clone();
        match conn.get::<_, Option<i64>>(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Redis GET failed");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: i64) -> Result<(), CounterError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| CounterError::Operation(e.to_string()))?;
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<(), CounterError> {
        let mut conn = self.conn.clone();
        conn.incr::<_, _, ()>(key, 1)
            .await
            .map_err(|e| CounterError::Operation(e.to_string()))?;
        Ok(())
    }
}
