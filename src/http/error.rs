//! Error translation from service results to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::task::{
    domain::TaskId,
    ports::TaskRepositoryError,
    services::TaskLifecycleError,
    validation::ValidationError,
};

/// API errors for task endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced task does not exist.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The request payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store was unavailable or rejected the operation.
    #[error(transparent)]
    Storage(TaskRepositoryError),

    /// UI template rendering failed.
    #[error(transparent)]
    Template(#[from] minijinja::Error),
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::NotFound(id) => Self::NotFound(id),
            TaskLifecycleError::Repository(repo) => Self::Storage(repo),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Task {id} not found") })),
            )
                .into_response(),
            Self::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "Validation failed",
                    "details": err.violations(),
                })),
            )
                .into_response(),
            Self::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
            Self::Template(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
