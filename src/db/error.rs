// Failures of the relational store, one variant per round-trip step

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// Pool could not be opened
    #[error("could not connect to MySQL: {0}")]
    Connection(String),

    /// Creating the test record table failed
    #[error("could not create test_records: {0}")]
    Schema(String),

    /// Writing a test record failed
    #[error("could not insert test record: {0}")]
    Insert(String),

    /// A read (or the liveness statement) failed
    #[error("query error: {0}")]
    Query(String),
}

impl DbError {
    /// The backend's own message, without the step prefix
    pub fn detail(&self) -> &str {
        match self {
            DbError::Connection(msg)
            | DbError::Schema(msg)
            | DbError::Insert(msg)
            | DbError::Query(msg) => msg,
        }
    }
}
