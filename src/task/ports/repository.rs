//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId, TaskPatch, TaskTitle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each mutating operation is one atomic transaction: a failure during commit
/// leaves the store unchanged and surfaces as
/// [`TaskRepositoryError::Storage`]. The store assigns identifiers and
/// timestamps; callers never supply them.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks ordered by `created_at` descending (newest first).
    async fn list_newest_first(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds the most recently created task whose title and description both
    /// exactly match and whose `created_at` is at or after `since`.
    ///
    /// Returns `None` when no such task exists. Ties at equal `created_at`
    /// resolve to the highest identifier.
    async fn find_recent_duplicate(
        &self,
        title: &TaskTitle,
        description: Option<&str>,
        since: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Inserts a new task with `completed = false`, assigning the identifier
    /// and both timestamps, and returns the persisted record.
    async fn insert(
        &self,
        title: &TaskTitle,
        description: Option<&str>,
    ) -> TaskRepositoryResult<Task>;

    /// Applies a partial update, refreshing `updated_at`, and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn apply_patch(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task>;

    /// Permanently removes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure: the store is unavailable or rejected the
    /// operation. Never retried here.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    #[must_use]
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
