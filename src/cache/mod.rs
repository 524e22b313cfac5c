// Cache Module
// Key-value store seam and its Redis implementation

mod error;
mod redis_cache;

pub use error::{CacheError, CacheResult};
pub use redis_cache::RedisCache;

use async_trait::async_trait;
use std::time::Duration;

/// Operations the service needs from a key-value store
///
/// Implementations must be safe to share across concurrent requests without
/// external locking.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Round-trips a PING to the server
    async fn ping(&self) -> CacheResult<()>;

    /// Stores `value` under `key`, expiring after `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Reads `key`, `None` when absent or expired
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;
}
