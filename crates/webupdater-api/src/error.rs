//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use webupdater_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// An [`AppError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: AppError,
}

impl ApiError {
    /// Wrap an error with an explicit status, e.g. from an axum rejection.
    pub fn with_status(status: StatusCode, error: AppError) -> Self {
        Self { status, error }
    }

    /// The status this error will be sent with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        let status = match error.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, error }
    }
}

fn error_code(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::NotFound => "NOT_FOUND",
        ErrorKind::Validation => "VALIDATION_ERROR",
        ErrorKind::Conflict => "CONFLICT",
        ErrorKind::Database => "DATABASE_ERROR",
        ErrorKind::Internal | ErrorKind::Storage | ErrorKind::Configuration => "INTERNAL_ERROR",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.error.is_server_error() {
            tracing::error!(
                kind = %self.error.kind,
                error = %self.error.message,
                source = ?self.error.source,
                "Internal server error"
            );
        }

        let body = ApiErrorResponse {
            error: error_code(self.error.kind).to_string(),
            message: self.error.message,
            details: self.error.details,
        };

        (self.status, Json(body)).into_response()
    }
}
