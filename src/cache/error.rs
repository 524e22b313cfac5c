// Error types for cache operations

use thiserror::Error;

/// Error types for cache connection and command execution
#[derive(Debug, Error)]
pub enum CacheError {
    /// Error occurred while opening the client or its connection manager
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    /// Error returned by the cache for a single command
    #[error("Cache command error: {0}")]
    CommandError(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::CommandError(err.to_string())
    }
}

pub type CacheResult<T> = Result<T, CacheError>;
