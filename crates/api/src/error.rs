use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shopfloor_core::error::CoreError;
use shopfloor_db::DbError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`DbError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ success: false, error, code }`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shopfloor_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A connection or procedure error from `shopfloor_db`.
    #[error(transparent)]
    Database(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A procedure call outlived its deadline.
    #[error("{procedure} timed out after {secs}s")]
    Timeout { procedure: &'static str, secs: u64 },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MissingParent { .. } => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_db_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Timeout { procedure, secs } => {
                tracing::error!(procedure = %procedure, secs, "Procedure call timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "TIMEOUT",
                    format!("{procedure} did not respond in time"),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a database error into an HTTP status, error code, and message.
///
/// - Unreachable store or closed manager maps to 503.
/// - A procedure failure maps to 500 and carries the procedure's message,
///   which operators need to see (e.g. "worker already assigned").
/// - Configuration errors map to 500 with a sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::Connection(_) | DbError::ShutDown => {
            tracing::error!(error = %err, "Database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "CONNECTION_ERROR",
                "Database is unavailable".to_string(),
            )
        }
        DbError::Procedure { procedure, message } => {
            tracing::error!(procedure = %procedure, error = %message, "Procedure failed");
            let message = if message.trim().is_empty() {
                format!("{procedure} failed")
            } else {
                message.clone()
            };
            (StatusCode::INTERNAL_SERVER_ERROR, "PROCEDURE_ERROR", message)
        }
        DbError::Config(msg) => {
            tracing::error!(error = %msg, "Database configuration error");
            internal()
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
