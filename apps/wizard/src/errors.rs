use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::backend_client::BackendError;
use crate::cv::EditError;
use crate::store::StoreError;
use crate::workflow::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    Edit(#[from] EditError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn no_parsed_data() -> Self {
        AppError::Conflict(
            "No résumé data yet: upload the LinkedIn export and continue to step 2".to_string(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidInput(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Edit(e) => {
                let status = match e {
                    EditError::IndexOutOfRange { .. } | EditError::UnknownSkill(_) => {
                        StatusCode::NOT_FOUND
                    }
                    EditError::DuplicateSkill(_) => StatusCode::CONFLICT,
                    EditError::EmptySkill | EditError::InvalidColor(_) => StatusCode::BAD_REQUEST,
                };
                (status, "EDIT_ERROR", e.to_string())
            }
            AppError::Store(e) => (StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string()),
            AppError::Backend(BackendError::Unauthenticated) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Not authenticated. Please sign in with LinkedIn.".to_string(),
            ),
            AppError::Backend(e) => {
                tracing::error!("Backend error: {e}");
                (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", e.to_string())
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
