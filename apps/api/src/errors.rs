use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Photo upload rejected: wrong content type, empty, or oversized.
    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    /// Export requested while no real preview has been generated.
    #[error("Please generate a CV preview first before downloading.")]
    ExportWithoutRender,

    #[error("Preference store error: {0}")]
    Preferences(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidAttachment(msg) => {
                tracing::warn!("Rejected attachment: {msg}");
                (StatusCode::BAD_REQUEST, "INVALID_ATTACHMENT", msg.clone())
            }
            AppError::ExportWithoutRender => (
                StatusCode::CONFLICT,
                "EXPORT_WITHOUT_RENDER",
                self.to_string(),
            ),
            AppError::Preferences(msg) => {
                tracing::error!("Preference store error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PREFERENCES_ERROR",
                    "Could not read or save preferences".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
