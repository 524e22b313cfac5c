// Write-then-read checks against each backend

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use tokio::time::timeout;

use crate::context::AppContext;
use crate::error::{Backend, ServiceError, ServiceResult};
use crate::models::{CacheRoundTrip, DatabaseRoundTrip};

pub const CACHE_TEST_KEY: &str = "test:key";
pub const CACHE_TEST_TTL: Duration = Duration::from_secs(60);
pub const RECENT_RECORD_LIMIT: u64 = 5;

/// Formats a timestamp the way every response body carries it
pub fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// SET a timestamped value under the test key, then GET it back
pub async fn cache_round_trip(
    context: &AppContext,
    now: DateTime<Utc>,
) -> ServiceResult<CacheRoundTrip> {
    let cache = context.cache()?;
    let limit = context.timeouts().operation;
    let value = format!("Hello Redis! Time: {}", rfc3339(now));

    bounded(Backend::Redis, limit, cache.set(CACHE_TEST_KEY, &value, CACHE_TEST_TTL))
        .await?
        .map_err(|e| ServiceError::operation("Redis SET failed", e))?;

    let stored = bounded(Backend::Redis, limit, cache.get(CACHE_TEST_KEY))
        .await?
        .map_err(|e| ServiceError::operation("Redis GET failed", e))?
        .ok_or_else(|| ServiceError::operation("Redis GET failed", "key not found"))?;

    Ok(CacheRoundTrip {
        key: CACHE_TEST_KEY.to_string(),
        value: stored,
    })
}

/// Ensure the table, insert one record, then read the most recent ones
pub async fn database_round_trip(
    context: &AppContext,
    now: DateTime<Utc>,
) -> ServiceResult<DatabaseRoundTrip> {
    let database = context.database()?;
    let limit = context.timeouts().operation;

    // DbError carries the failing step into the response text
    bounded(Backend::Mysql, limit, database.ensure_schema()).await??;

    let message = format!("Hello MySQL! Time: {}", rfc3339(now));
    let inserted_record = bounded(Backend::Mysql, limit, database.insert(message, now)).await??;

    let recent_records =
        bounded(Backend::Mysql, limit, database.recent(RECENT_RECORD_LIMIT)).await??;

    Ok(DatabaseRoundTrip {
        inserted_record,
        recent_records,
    })
}

async fn bounded<F: Future>(backend: Backend, limit: Duration, call: F) -> ServiceResult<F::Output> {
    timeout(limit, call)
        .await
        .map_err(|_| ServiceError::Timeout(backend, limit))
}
