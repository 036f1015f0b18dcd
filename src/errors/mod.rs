//! Unified error handling with a small, uniform failure body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failure body returned by every endpoint that reports errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Query timed out after {0}s")]
    Timeout(u64),

    #[error("Too many pending requests")]
    Overloaded,
}

impl AppError {
    /// Whether the caller may retry the same request later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Overloaded)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Timeout(_) | AppError::Overloaded => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Database(_) => "INTERNAL_ERROR",
            AppError::Timeout(_) => "QUERY_TIMEOUT",
            AppError::Overloaded => "OVERLOADED",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Configuration(msg) => {
                tracing::error!(error = %msg, "Datastore configuration error");
                "The service is not configured".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "An internal error occurred".to_string()
            }
            AppError::Timeout(secs) => {
                tracing::warn!(timeout_secs = secs, "Query timed out");
                "The request timed out, please retry".to_string()
            }
            AppError::Overloaded => {
                tracing::warn!("Rejected request, connection queue is full");
                "The service is busy, please retry".to_string()
            }
        };

        let body = ErrorBody {
            error: message,
            code: self.code(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
