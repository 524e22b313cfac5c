use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder,
    QuerySelect, Schema, Statement,
};

use crate::db::{DbError, RecordStore};
use crate::entity::{prelude::TestRecords, test_records, TestRecord};

/// Repository for the connectivity-test records
#[derive(Clone)]
pub struct TestRecordRepository {
    conn: DatabaseConnection,
}

impl TestRecordRepository {
    /// Creates a new test record repository with the given database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl RecordStore for TestRecordRepository {
    async fn ping(&self) -> Result<(), DbError> {
        let backend = self.conn.get_database_backend();
        self.conn
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), DbError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // Table layout is derived from the entity definition
        let mut statement = schema.create_table_from_entity(TestRecords);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .map_err(|e| DbError::Schema(e.to_string()))?;
        Ok(())
    }

    async fn insert(
        &self,
        message: String,
        timestamp: DateTime<Utc>,
    ) -> Result<TestRecord, DbError> {
        let record = test_records::ActiveModel {
            message: ActiveValue::Set(message),
            timestamp: ActiveValue::Set(timestamp),
            ..Default::default()
        };

        record
            .insert(&self.conn)
            .await
            .map_err(|e| DbError::Insert(e.to_string()))
    }

    async fn recent(&self, limit: u64) -> Result<Vec<TestRecord>, DbError> {
        TestRecords::find()
            .order_by_desc(test_records::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }
}
