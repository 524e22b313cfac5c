// Database connection pooling management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::debug;

use crate::config::{redacted_url, MysqlConfig};
use crate::db::error::DbError;
use crate::db::repositories::TestRecordRepository;

/// Database connection pool for managing Sea-ORM connections
pub struct DbPool {
    pool: DatabaseConnection,
}

impl DbPool {
    /// Creates a new MySQL connection pool, failing if no connection can be opened
    pub async fn new(config: &MysqlConfig, connect_timeout: Duration) -> Result<Self, DbError> {
        let url = config
            .url()
            .map_err(|e| DbError::Connection(e.to_string()))?;

        // Library defaults otherwise; the probe traffic is tiny
        let max_connections = 10;
        let min_connections = 1;
        let idle_timeout_secs: u64 = 300;
        let debug_mode = false;

        let conn_opts = ConnectOptions::new(url.to_string())
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(connect_timeout)
            .acquire_timeout(connect_timeout)
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .sqlx_logging(debug_mode)
            .to_owned();

        let pool = Database::connect(conn_opts)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        debug!(url = %redacted_url(&url), "MySQL pool connected");
        Ok(DbPool { pool })
    }

    /// Creates the test record repository over this pool
    pub fn test_records(&self) -> TestRecordRepository {
        TestRecordRepository::new(self.pool.clone())
    }
}
