// Backend health checks

use tokio::time::timeout;
use tracing::warn;

use crate::context::AppContext;
use crate::error::ServiceError;
use crate::models::ConnectionStatus;

/// Re-checks each backend handle at call time
pub struct HealthChecker<'a> {
    context: &'a AppContext,
}

impl<'a> HealthChecker<'a> {
    pub fn new(context: &'a AppContext) -> Self {
        Self { context }
    }

    /// Probes both backends concurrently, returning `(redis, mysql)`
    pub async fn check(&self) -> (ConnectionStatus, ConnectionStatus) {
        tokio::join!(self.check_cache(), self.check_database())
    }

    pub async fn check_cache(&self) -> ConnectionStatus {
        let cache = match self.context.cache() {
            Ok(cache) => cache,
            Err(err) => return unusable(&err),
        };

        match timeout(self.context.timeouts().probe, cache.ping()).await {
            Ok(Ok(())) => ConnectionStatus::Connected,
            Ok(Err(e)) => {
                warn!(error = %e, "Redis health probe failed");
                ConnectionStatus::Disconnected
            }
            Err(_) => {
                warn!("Redis health probe timed out");
                ConnectionStatus::Disconnected
            }
        }
    }

    pub async fn check_database(&self) -> ConnectionStatus {
        let database = match self.context.database() {
            Ok(database) => database,
            Err(err) => return unusable(&err),
        };

        match timeout(self.context.timeouts().probe, database.ping()).await {
            Ok(Ok(())) => ConnectionStatus::Connected,
            Ok(Err(e)) => {
                warn!(error = %e, "MySQL health probe failed");
                ConnectionStatus::Disconnected
            }
            Err(_) => {
                warn!("MySQL health probe timed out");
                ConnectionStatus::Disconnected
            }
        }
    }
}

fn unusable(err: &ServiceError) -> ConnectionStatus {
    match err {
        ServiceError::Disabled(_) => ConnectionStatus::Disabled,
        _ => ConnectionStatus::Disconnected,
    }
}
