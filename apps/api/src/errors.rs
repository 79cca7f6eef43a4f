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
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input is present but below the minimum length a feature needs.
    /// Surfaced to the user as a warning; nothing else runs.
    #[error("Insufficient input: {message} (minimum {min_chars} characters)")]
    InsufficientInput { min_chars: usize, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Paraphrase error: {0}")]
    Paraphrase(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InsufficientInput { message, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_INPUT",
                message.clone(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InvalidUpload(msg) => (StatusCode::BAD_REQUEST, "INVALID_UPLOAD", msg.clone()),
            AppError::Paraphrase(msg) => {
                tracing::error!("Paraphrase error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PARAPHRASE_ERROR",
                    format!("The paraphrasing model could not rewrite the text: {msg}"),
                )
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    format!("The PDF could not be exported: {msg}"),
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

/// Rejects input shorter than `min_chars` Unicode scalar values with the given warning.
pub fn require_min_chars(text: &str, min_chars: usize, message: &str) -> Result<(), AppError> {
    if text.chars().count() < min_chars {
        return Err(AppError::InsufficientInput {
            min_chars,
            message: message.to_string(),
        });
    }
    Ok(())
}
