use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use slidedeck_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `slidedeck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure. `context` is the fixed client-facing message;
    /// `source` is kept for the log only and never exposed.
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a closure mapping a `sqlx::Error` to [`AppError::Database`]
    /// with a fixed client-facing message, for use with `map_err`.
    pub fn db(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Database { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Database { context, source } => {
                tracing::error!(error = %source, "{context}");
                (StatusCode::INTERNAL_SERVER_ERROR, (*context).to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
