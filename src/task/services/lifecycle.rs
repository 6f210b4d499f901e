//! Service layer for task creation, retrieval, update, and deletion.

use crate::task::{
    domain::{Task, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Trailing window within which an identical create request is treated as a
/// repeat of an existing task rather than a new one.
pub const DUPLICATE_WINDOW_SECONDS: i64 = 2;

/// Validated request payload for creating a task.
///
/// Produced by the validation layer; the service itself never raises a
/// validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: TaskTitle,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
        }
    }

    /// Sets the optional description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the requested title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the requested description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        // A repository-level miss is the same condition as a service-level
        // miss; fold it so callers match on one variant.
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Holds no state between calls; the repository is the single source of
/// truth. Safe to call concurrently from multiple tasks.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

// Manual impl: a derive would require `R: Clone` and `C: Clone`, but the
// fields are shared handles.
impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store read fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_newest_first().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// identifier, or [`TaskLifecycleError::Repository`] when the lookup
    /// fails.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Creates a new task, suppressing rapid duplicate submissions.
    ///
    /// When an existing task with the same title and description was created
    /// within the trailing [`DUPLICATE_WINDOW_SECONDS`] window, that task is
    /// returned unchanged instead of inserting a new row. This guards
    /// against client retries and double-clicks; it is best-effort, not a
    /// uniqueness constraint, and two racing creates may both insert.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let window_start = self.clock.utc() - TimeDelta::seconds(DUPLICATE_WINDOW_SECONDS);
        let recent = self
            .repository
            .find_recent_duplicate(request.title(), request.description(), window_start)
            .await?;
        if let Some(existing) = recent {
            return Ok(existing);
        }

        let task = self
            .repository
            .insert(request.title(), request.description())
            .await?;
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Only fields present in the patch change; the store refreshes
    /// `updated_at` as a side effect of the write. Callers confirm existence
    /// beforehand via [`Self::get`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task vanished
    /// between lookup and write, or [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, task: &Task, patch: TaskPatch) -> TaskLifecycleResult<Task> {
        Ok(self.repository.apply_patch(task.id(), &patch).await?)
    }

    /// Permanently removes a task. No soft delete, no recovery path.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task vanished
    /// between lookup and write, or [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn delete(&self, task: &Task) -> TaskLifecycleResult<()> {
        Ok(self.repository.delete(task.id()).await?)
    }
}
