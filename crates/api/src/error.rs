use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gigboard_core::error::CoreError;
use serde_json::{json, Value};
use sqlx::error::ErrorKind;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// `{"errors": [...]}` for client input problems (400) and
/// `{"error": "..."}` for everything else.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gigboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (body or path) with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    error_body(format!("{entity} not found")),
                ),
                CoreError::Validation(messages) => (StatusCode::BAD_REQUEST, errors_body(messages)),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, errors_body(vec![msg])),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn error_body(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

fn errors_body(messages: Vec<String>) -> Value {
    json!({ "errors": messages })
}

fn internal() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body("An internal error occurred"),
    )
}

/// Classify a sqlx error into an HTTP status and body.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key, NOT NULL and CHECK violations map to 400; these only
///   surface when a write races with a concurrent change.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, error_body("record not found")),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::ForeignKeyViolation => (
                StatusCode::BAD_REQUEST,
                errors_body(vec![
                    "referenced freelancer or client does not exist".to_string()
                ]),
            ),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => (
                StatusCode::BAD_REQUEST,
                errors_body(vec![db_err.message().to_string()]),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
