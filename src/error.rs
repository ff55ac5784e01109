use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that can be returned from handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Storage errors, as a closed set. Clients only ever see these
    // messages; the underlying driver text stays in the log.
    #[error("Storage backend unavailable")]
    Unavailable,

    #[error("Storage rejected the write")]
    WriteRejected,

    #[error("Storage operation timed out")]
    Timeout,

    // Internal errors
    #[error("Internal server error")]
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            // 422 Unprocessable Entity
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),

            // 500 Internal Server Error
            AppError::Unavailable | AppError::WriteRejected | AppError::Timeout => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { detail });

        (status, body).into_response()
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        // Log the raw driver error here, once, so handlers never have to.
        tracing::error!("MongoDB error: {}", err);

        match *err.kind {
            ErrorKind::Write(_) => AppError::WriteRejected,
            ErrorKind::Io(ref io) if io.kind() == std::io::ErrorKind::TimedOut => AppError::Timeout,
            _ => AppError::Unavailable,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errs: validator::ValidationErrors) -> Self {
        AppError::Validation(errs.to_string())
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
