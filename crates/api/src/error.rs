use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fyyur_core::error::CoreError;
use serde::Serialize;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Why a create, edit or delete submission did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The record to change does not exist.
    NotFound,
    /// The store rejected the data (missing required field, unknown reference, ...).
    ConstraintViolation,
    /// The submission could not be interpreted (e.g. an unparseable start time).
    InvalidInput,
    /// The store could not be reached.
    StorageUnavailable,
    /// Anything else.
    Internal,
}

/// A classified submission failure, safe to show to the user.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub reason: FailureReason,
    pub detail: String,
}

impl Failure {
    fn new(reason: FailureReason, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }
}

impl AppError {
    /// Classify this error for a submission outcome.
    pub fn failure(&self) -> Failure {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => Failure::new(
                    FailureReason::NotFound,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => Failure::new(FailureReason::InvalidInput, msg),
                CoreError::Conflict(msg) => Failure::new(FailureReason::ConstraintViolation, msg),
                CoreError::Internal(_) => {
                    Failure::new(FailureReason::Internal, "An internal error occurred")
                }
            },
            AppError::Database(err) => classify_sqlx_failure(err),
            AppError::BadRequest(msg) => Failure::new(FailureReason::InvalidInput, msg),
            AppError::InternalError(_) => {
                Failure::new(FailureReason::Internal, "An internal error occurred")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Whether a database error is an integrity constraint violation
/// (SQLSTATE class 23: not-null, foreign key, unique, check).
fn is_constraint_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.starts_with("23")),
        _ => false,
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Integrity constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if is_constraint_violation(err) => (
            StatusCode::CONFLICT,
            "CONFLICT",
            db_err.message().to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error raised while applying a submission.
fn classify_sqlx_failure(err: &sqlx::Error) -> Failure {
    match err {
        sqlx::Error::RowNotFound => Failure::new(FailureReason::NotFound, "Resource not found"),
        sqlx::Error::Database(db_err) if is_constraint_violation(err) => {
            Failure::new(FailureReason::ConstraintViolation, db_err.message())
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => {
            Failure::new(FailureReason::StorageUnavailable, "The database is unavailable")
        }
        _ => Failure::new(FailureReason::Internal, "An internal error occurred"),
    }
}
