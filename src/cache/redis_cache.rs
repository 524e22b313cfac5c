// Redis-backed cache store

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::time::Duration;
use tracing::debug;

use super::{CacheError, CacheResult, CacheStore};
use crate::config::{redacted_url, RedisConfig};

/// Cache store over a multiplexed, auto-reconnecting Redis connection
#[derive(Clone)]
pub struct RedisCache {
    connection_manager: ConnectionManager,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("connection_manager", &"ConnectionManager")
            .finish()
    }
}

impl RedisCache {
    /// Opens a client for the configured server and verifies it answers PING
    pub async fn connect(config: &RedisConfig) -> CacheResult<Self> {
        let url = config
            .url()
            .map_err(|e| CacheError::ConnectionError(e.to_string()))?;

        let client = redis::Client::open(url.as_str()).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let connection_manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let cache = Self { connection_manager };
        cache.ping().await?;

        debug!(url = %redacted_url(&url), "Redis cache connected");
        Ok(cache)
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.connection_manager.clone();
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;

        if pong == "PONG" {
            Ok(())
        } else {
            Err(CacheError::CommandError(format!(
                "Unexpected PING reply: {}",
                pong
            )))
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection_manager.clone();
        let ttl_seconds = ttl.as_secs().max(1);

        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_seconds)
            .query_async(&mut conn)
            .await?;

        debug!(key = key, ttl_seconds = ttl_seconds, "Cache SET");
        Ok(())
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection_manager.clone();
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;

        debug!(key = key, hit = value.is_some(), "Cache GET");
        Ok(value)
    }
}
