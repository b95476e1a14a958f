//! Application Error Types
//!
//! Centralized error taxonomy with Axum integration. Every failure kind is
//! mapped deliberately to a response status; nothing falls through to a
//! framework default.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    /// Classify sqlx errors into the taxonomy.
    ///
    /// Connection-class failures (pool exhaustion, I/O, TLS) become
    /// `BackendUnavailable` so callers can distinguish "no data" from
    /// "the store is down". Unique-key violations become `Conflict`.
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => AppError::BackendUnavailable(e.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(db_err.to_string())
            }
            _ => AppError::Database(e),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::BackendUnavailable(msg) => {
                tracing::error!("Backend unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Backend unavailable".into())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
