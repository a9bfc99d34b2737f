use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Roadmap {0} not found")]
    RoadmapNotFound(Uuid),

    #[error("Week {week} not found in roadmap {roadmap_id}")]
    WeekNotFound { roadmap_id: Uuid, week: i32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed AI response: {0}")]
    MalformedAiResponse(String),

    #[error("Upstream AI service unavailable: {0}")]
    Upstream(#[from] LlmError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UserNotFound(id) => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                format!("User {id} not found"),
            ),
            AppError::RoadmapNotFound(id) => (
                StatusCode::NOT_FOUND,
                "ROADMAP_NOT_FOUND",
                format!("Roadmap {id} not found"),
            ),
            AppError::WeekNotFound { roadmap_id, week } => (
                StatusCode::NOT_FOUND,
                "WEEK_NOT_FOUND",
                format!("Week {week} not found in roadmap {roadmap_id}"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MalformedAiResponse(detail) => {
                tracing::error!("Malformed AI response: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_AI_RESPONSE",
                    "The AI service returned a response that could not be parsed".to_string(),
                )
            }
            AppError::Upstream(e) => {
                tracing::error!("Upstream AI error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    "The AI service is currently unavailable".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
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
