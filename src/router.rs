// HTTP route table

use std::time::Duration;

use axum::routing::{get, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, ping, test_all, test_mysql, test_redis, AppState};

/// Builds the fixed route table with CORS and request logging
pub fn build_router(state: AppState) -> Router {
    // The browser dashboard calls these endpoints cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check))
        .route("/test-redis", get(test_redis))
        .route("/test-mysql", get(test_mysql))
        .route("/test-all", get(test_all))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
