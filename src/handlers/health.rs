// Liveness and health endpoint handlers

use axum::{extract::State, Json};
use chrono::Utc;

use crate::handlers::AppState;
use crate::models::{HealthResponse, PingResponse};
use crate::services::health::HealthChecker;
use crate::services::round_trip::rfc3339;

/// Handler for GET /ping - Static liveness payload, never touches a backend
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        status: "healthy",
    })
}

/// Handler for GET /health - Always 200, with a live re-check of each backend
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (redis, mysql) = HealthChecker::new(&state).check().await;

    Json(HealthResponse {
        status: "healthy",
        service: "biz",
        redis,
        mysql,
        timestamp: rfc3339(Utc::now()),
    })
}
