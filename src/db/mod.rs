// Database Module
// Relational store seam, connection pool and repositories

mod error;
mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::TestRecordRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entity::TestRecord;

/// Operations the service needs from the relational store
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Runs a trivial statement to confirm the server answers
    async fn ping(&self) -> Result<(), DbError>;

    /// Creates the test record table when it does not exist yet
    async fn ensure_schema(&self) -> Result<(), DbError>;

    /// Inserts a record and returns it with its assigned identifier
    async fn insert(&self, message: String, timestamp: DateTime<Utc>)
        -> Result<TestRecord, DbError>;

    /// Returns up to `limit` records, highest identifier first
    async fn recent(&self, limit: u64) -> Result<Vec<TestRecord>, DbError>;
}
