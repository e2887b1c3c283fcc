use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recipe_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]: every error becomes a bare status code with no
/// body, and the code and message go to the log instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `recipe_core`.
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

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Classify into an HTTP status, a stable error code, and a log message.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
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
                CoreError::ConcurrencyConflict { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONCURRENCY_CONFLICT",
                    core.to_string(),
                ),
                CoreError::Internal(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    msg.clone(),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        if status.is_server_error() {
            tracing::error!(code, error = %message, "Request failed");
        } else {
            tracing::debug!(code, status = status.as_u16(), error = %message, "Request rejected");
        }

        status.into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - `invalid_parameter_value` (SQLSTATE 22023, raised by the search routine)
///   maps to 400.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("22023") => (
            StatusCode::BAD_REQUEST,
            "INVALID_PARAMETER",
            db_err.message().to_string(),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_ERROR",
            other.to_string(),
        ),
    }
}
