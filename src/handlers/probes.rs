// Backend round-trip test handlers

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::warn;

use crate::error::ServiceResult;
use crate::handlers::AppState;
use crate::models::{MysqlTestResponse, RedisTestResponse, TestAllResponse};
use crate::services::round_trip::{cache_round_trip, database_round_trip, rfc3339};

/// Handler for GET /test-redis
pub async fn test_redis(State(state): State<AppState>) -> ServiceResult<Json<RedisTestResponse>> {
    let result = cache_round_trip(&state, Utc::now()).await.inspect_err(|e| {
        warn!(error = %e, "Redis round trip failed");
    })?;

    Ok(Json(RedisTestResponse {
        message: "Redis test succeeded",
        result,
        timestamp: rfc3339(Utc::now()),
    }))
}

/// Handler for GET /test-mysql
pub async fn test_mysql(State(state): State<AppState>) -> ServiceResult<Json<MysqlTestResponse>> {
    let result = database_round_trip(&state, Utc::now())
        .await
        .inspect_err(|e| {
            warn!(error = %e, "MySQL round trip failed");
        })?;

    Ok(Json(MysqlTestResponse {
        message: "MySQL test succeeded",
        result,
        timestamp: rfc3339(Utc::now()),
    }))
}

/// Handler for GET /test-all - Both round trips, each reported on its own
pub async fn test_all(State(state): State<AppState>) -> Json<TestAllResponse> {
    let now = Utc::now();
    let (redis, mysql) = tokio::join!(
        cache_round_trip(&state, now),
        database_round_trip(&state, now)
    );

    Json(TestAllResponse {
        redis: redis.into(),
        mysql: mysql.into(),
        timestamp: rfc3339(now),
    })
}
