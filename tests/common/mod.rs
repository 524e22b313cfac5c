// In-memory backends whose reachability can be flipped mid-test

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use biz_service::cache::{CacheError, CacheResult, CacheStore};
use biz_service::config::Timeouts;
use biz_service::db::{DbError, RecordStore};
use biz_service::entity::TestRecord;
use biz_service::{build_router, AppContext};

#[derive(Default)]
pub struct StubCache {
    down: AtomicBool,
    // SET succeeds without storing, as if the key expired at once
    drop_writes: AtomicBool,
    get_fails: AtomicBool,
    delay: Mutex<Option<Duration>>,
    entries: Mutex<HashMap<String, String>>,
    pub calls: AtomicUsize,
}

impl StubCache {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn drop_writes(&self, drop: bool) {
        self.drop_writes.store(drop, Ordering::SeqCst);
    }

    pub fn fail_get(&self, fail: bool) {
        self.get_fails.store(fail, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn enter(&self) -> CacheResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.down.load(Ordering::SeqCst) {
            return Err(CacheError::CommandError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheStore for StubCache {
    async fn ping(&self) -> CacheResult<()> {
        self.enter().await
    }

    async fn set(&self, key: &str, value: &str, _ttl: Duration) -> CacheResult<()> {
        self.enter().await?;
        if !self.drop_writes.load(Ordering::SeqCst) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.enter().await?;
        if self.get_fails.load(Ordering::SeqCst) {
            return Err(CacheError::CommandError("READONLY replica".to_string()));
        }
        Ok(self.stored(key))
    }
}

#[derive(Default)]
pub struct StubRecords {
    down: AtomicBool,
    schema_fails: AtomicBool,
    insert_fails: AtomicBool,
    recent_fails: AtomicBool,
    rows: Mutex<Vec<TestRecord>>,
    pub calls: AtomicUsize,
}

impl StubRecords {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn fail_schema(&self, fail: bool) {
        self.schema_fails.store(fail, Ordering::SeqCst);
    }

    pub fn fail_insert(&self, fail: bool) {
        self.insert_fails.store(fail, Ordering::SeqCst);
    }

    pub fn fail_recent(&self, fail: bool) {
        self.recent_fails.store(fail, Ordering::SeqCst);
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn enter(
        &self,
        step_fails: &AtomicBool,
        as_error: fn(String) -> DbError,
    ) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down.load(Ordering::SeqCst) {
            return Err(as_error("server has gone away".to_string()));
        }
        if step_fails.load(Ordering::SeqCst) {
            return Err(as_error("lock wait timeout exceeded".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for StubRecords {
    async fn ping(&self) -> Result<(), DbError> {
        self.enter(&AtomicBool::new(false), DbError::Query)
    }

    async fn ensure_schema(&self) -> Result<(), DbError> {
        self.enter(&self.schema_fails, DbError::Schema)
    }

    async fn insert(
        &self,
        message: String,
        timestamp: DateTime<Utc>,
    ) -> Result<TestRecord, DbError> {
        self.enter(&self.insert_fails, DbError::Insert)?;
        let mut rows = self.rows.lock().unwrap();
        let record = TestRecord {
            id: rows.len() as u32 + 1,
            message,
            timestamp,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<TestRecord>, DbError> {
        self.enter(&self.recent_fails, DbError::Query)?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

pub fn fast_timeouts() -> Timeouts {
    Timeouts {
        connect: Duration::from_millis(200),
        probe: Duration::from_millis(200),
        operation: Duration::from_millis(200),
    }
}

pub fn app(cache: Option<Arc<StubCache>>, records: Option<Arc<StubRecords>>) -> Router {
    let cache = cache.map(|c| c as Arc<dyn CacheStore>);
    let records = records.map(|r| r as Arc<dyn RecordStore>);
    build_router(Arc::new(AppContext::new(cache, records, fast_timeouts())))
}

pub fn disabled_app() -> Router {
    build_router(Arc::new(AppContext::disabled(fast_timeouts())))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
