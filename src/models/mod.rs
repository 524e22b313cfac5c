// API response models
use serde::Serialize;

use crate::entity::TestRecord;
use crate::error::ServiceError;

/// Reachability of one backend as reported by `/health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Disabled,
}

/// Response structure for GET /ping
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// Response structure for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub redis: ConnectionStatus,
    pub mysql: ConnectionStatus,
    pub timestamp: String,
}

/// Key and value read back by the cache round trip
#[derive(Debug, Clone, Serialize)]
pub struct CacheRoundTrip {
    pub key: String,
    pub value: String,
}

/// Records written and read back by the database round trip
///
/// Each record renders with lowercase keys (`id`, `message`, `timestamp`),
/// not the capitalised `ID`/`Message`/`Timestamp` form.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseRoundTrip {
    pub inserted_record: TestRecord,
    pub recent_records: Vec<TestRecord>,
}

/// Response structure for GET /test-redis
#[derive(Debug, Serialize)]
pub struct RedisTestResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub result: CacheRoundTrip,
    pub timestamp: String,
}

/// Response structure for GET /test-mysql
#[derive(Debug, Serialize)]
pub struct MysqlTestResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub result: DatabaseRoundTrip,
    pub timestamp: String,
}

/// Per-backend section of GET /test-all
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BackendReport<T> {
    Connected {
        test: &'static str,
        #[serde(flatten)]
        result: T,
    },
    Error {
        error: String,
    },
    NotInitialized,
    Disabled,
}

impl<T> From<Result<T, ServiceError>> for BackendReport<T> {
    fn from(outcome: Result<T, ServiceError>) -> Self {
        match outcome {
            Ok(result) => BackendReport::Connected {
                test: "passed",
                result,
            },
            Err(ServiceError::Unavailable(_)) => BackendReport::NotInitialized,
            Err(ServiceError::Disabled(_)) => BackendReport::Disabled,
            Err(err) => BackendReport::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Response structure for GET /test-all
#[derive(Debug, Serialize)]
pub struct TestAllResponse {
    pub redis: BackendReport<CacheRoundTrip>,
    pub mysql: BackendReport<DatabaseRoundTrip>,
    pub timestamp: String,
}
