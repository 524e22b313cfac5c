// Application context shared by every request handler

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::cache::{CacheStore, RedisCache};
use crate::config::{ServiceConfig, Timeouts};
use crate::db::{DbPool, RecordStore};
use crate::error::{Backend, ServiceError, ServiceResult};

/// Backend handles opened once at startup
///
/// Either handle may be absent when its startup connection failed; handlers
/// report that as "not connected" rather than attempting the call.
pub struct AppContext {
    cache: Option<Arc<dyn CacheStore>>,
    database: Option<Arc<dyn RecordStore>>,
    backends_enabled: bool,
    timeouts: Timeouts,
}

impl AppContext {
    pub fn new(
        cache: Option<Arc<dyn CacheStore>>,
        database: Option<Arc<dyn RecordStore>>,
        timeouts: Timeouts,
    ) -> Self {
        Self {
            cache,
            database,
            backends_enabled: true,
            timeouts,
        }
    }

    /// Context for the variant that never touches a backend
    pub fn disabled(timeouts: Timeouts) -> Self {
        Self {
            cache: None,
            database: None,
            backends_enabled: false,
            timeouts,
        }
    }

    /// Connects both backends concurrently; failures are logged, never returned
    pub async fn initialize(config: &ServiceConfig) -> Self {
        if !config.backends_enabled {
            info!("Backends disabled, skipping Redis and MySQL connections");
            return Self::disabled(config.timeouts);
        }

        if config.mysql.password.is_none() {
            warn!("DB_PASSWORD is not set, connecting to MySQL without a password");
        }

        let (cache, database) = tokio::join!(connect_cache(config), connect_database(config));
        Self::new(cache, database, config.timeouts)
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    pub fn backends_enabled(&self) -> bool {
        self.backends_enabled
    }

    /// Returns the cache handle or the reason it cannot be used
    pub fn cache(&self) -> ServiceResult<&Arc<dyn CacheStore>> {
        self.resolve(self.cache.as_ref(), Backend::Redis)
    }

    /// Returns the database handle or the reason it cannot be used
    pub fn database(&self) -> ServiceResult<&Arc<dyn RecordStore>> {
        self.resolve(self.database.as_ref(), Backend::Mysql)
    }

    fn resolve<'a, T: ?Sized>(
        &self,
        handle: Option<&'a Arc<T>>,
        backend: Backend,
    ) -> ServiceResult<&'a Arc<T>> {
        match handle {
            Some(handle) => Ok(handle),
            None if !self.backends_enabled => Err(ServiceError::Disabled(backend)),
            None => Err(ServiceError::Unavailable(backend)),
        }
    }
}

async fn connect_cache(config: &ServiceConfig) -> Option<Arc<dyn CacheStore>> {
    let attempt = RedisCache::connect(&config.redis);
    match bounded_connect(Backend::Redis, config.timeouts.connect, attempt).await {
        Some(cache) => {
            info!(host = %config.redis.host, port = config.redis.port, "Redis connected");
            let cache: Arc<dyn CacheStore> = Arc::new(cache);
            Some(cache)
        }
        None => None,
    }
}

async fn connect_database(config: &ServiceConfig) -> Option<Arc<dyn RecordStore>> {
    let attempt = async {
        let pool = DbPool::new(&config.mysql, config.timeouts.connect).await?;
        let repository = pool.test_records();
        repository.ping().await?;
        Ok::<_, crate::db::DbError>(repository)
    };
    match bounded_connect(Backend::Mysql, config.timeouts.connect, attempt).await {
        Some(repository) => {
            info!(host = %config.mysql.host, database = %config.mysql.name, "MySQL connected");
            let database: Arc<dyn RecordStore> = Arc::new(repository);
            Some(database)
        }
        None => None,
    }
}

async fn bounded_connect<T, E, F>(backend: Backend, limit: Duration, attempt: F) -> Option<T>
where
    E: std::fmt::Display,
    F: Future<Output = Result<T, E>>,
{
    match timeout(limit, attempt).await {
        Ok(Ok(handle)) => Some(handle),
        Ok(Err(e)) => {
            error!(backend = %backend, error = %e, "Connection failed");
            None
        }
        Err(_) => {
            error!(backend = %backend, timeout = ?limit, "Connection timed out");
            None
        }
    }
}
