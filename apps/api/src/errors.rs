use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::store::StoreError;

/// Failure of a content operation. Each variant carries the collaborator's
/// error unchanged.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Topic lookup failed: {0}")]
    Lookup(#[from] StoreError),

    #[error("Text generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("SEO assessment could not be decoded: {0}")]
    AssessmentParse(#[source] serde_json::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Content(ContentError::Lookup(StoreError::NotFound(id))) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Topic {id} not found"),
            ),
            AppError::Content(ContentError::Lookup(StoreError::Database(e))) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Content(ContentError::Generation(e)) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The language model request failed".to_string(),
                )
            }
            AppError::Content(ContentError::AssessmentParse(e)) => {
                tracing::error!("SEO assessment parse error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ASSESSMENT_PARSE_ERROR",
                    "The language model returned an unreadable assessment".to_string(),
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
