//! HTTP request handlers for task endpoints.

#![expect(
    clippy::needless_pass_by_value,
    reason = "axum extractors are consumed by value in handler signatures"
)]

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use serde_json::{Value, json};

use super::{AppState, error::ApiError};
use crate::task::{domain::TaskId, ports::TaskRepository, validation};

/// Lists all tasks, newest first.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] when the store read fails.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service().list().await?;
    Ok(Json(json!({ "data": tasks })))
}

/// Creates a task from a raw JSON payload.
///
/// Rapid duplicate submissions within the dedup window return the existing
/// task; the response is 201 either way, matching a retried create.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for a malformed payload or
/// [`ApiError::Storage`] when persistence fails.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let request = validation::parse_create(&payload)?;
    let task = state.service().create(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "data": task }))))
}

/// Retrieves a single task.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for an unknown id or
/// [`ApiError::Storage`] when the lookup fails.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state.service().get(TaskId::new(id)).await?;
    Ok(Json(json!({ "data": task })))
}

/// Applies a partial update to a task.
///
/// Only fields present in the payload change; absent fields are left
/// untouched.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for an unknown id,
/// [`ApiError::Validation`] for a malformed payload, or
/// [`ApiError::Storage`] when persistence fails.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state.service().get(TaskId::new(id)).await?;
    let patch = validation::parse_patch(&payload)?;
    let updated = state.service().update(&task, patch).await?;
    Ok(Json(json!({ "data": updated })))
}

/// Permanently deletes a task.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for an unknown id or
/// [`ApiError::Storage`] when persistence fails.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state.service().get(TaskId::new(id)).await?;
    state.service().delete(&task).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint.
#[expect(clippy::unused_async, reason = "axum handlers must return futures")]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Ping endpoint for liveness probes.
#[expect(clippy::unused_async, reason = "axum handlers must return futures")]
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}
