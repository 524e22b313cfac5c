use std::fmt;
use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;

/// The two stores the service probes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Redis,
    Mysql,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Redis => f.write_str("Redis"),
            Backend::Mysql => f.write_str("MySQL"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The handle was never created because the startup connection failed
    #[error("{0} is not connected")]
    Unavailable(Backend),
    /// Backends are switched off by configuration
    #[error("{0} is disabled")]
    Disabled(Backend),
    #[error("{0} operation timed out after {1:?}")]
    Timeout(Backend, Duration),
    #[error("{context}: {message}")]
    Operation {
        context: &'static str,
        message: String,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn operation(context: &'static str, err: impl fmt::Display) -> Self {
        ServiceError::Operation {
            context,
            message: err.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unavailable(_) | ServiceError::Disabled(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServiceError::Timeout(..) | ServiceError::Operation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Each database step reports under its own name
impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        let context = match &err {
            DbError::Connection(_) => "connection failed",
            DbError::Schema(_) => "table migration failed",
            DbError::Insert(_) => "insert failed",
            DbError::Query(_) => "query failed",
        };
        ServiceError::operation(context, err.detail())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
