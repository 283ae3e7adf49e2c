#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Absent optional fields (email, phone, skills, ...) are NOT errors — the
/// pipeline reports them as sentinel values in the record so display logic
/// never branches on error handling for the common miss case.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Document format error: {0}")]
    DocumentFormat(String),

    #[error("Recognizer error: {0}")]
    Recognizer(String),

    #[error("Recognizer unavailable: {0}")]
    RecognizerUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::DocumentFormat(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_FORMAT_ERROR",
                msg.clone(),
            ),
            AppError::Recognizer(msg) => {
                tracing::error!("Recognizer error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RECOGNIZER_ERROR",
                    "Entity recognition failed".to_string(),
                )
            }
            AppError::RecognizerUnavailable(msg) => {
                tracing::error!("Recognizer unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "RECOGNIZER_UNAVAILABLE",
                    "The entity recognizer is not available".to_string(),
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
