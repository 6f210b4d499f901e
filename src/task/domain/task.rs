//! Task aggregate root and partial-update value types.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Task aggregate root.
///
/// Fields are private; the aggregate is constructed either by the store
/// (via [`Task::from_persisted`]) or mutated through [`Task::apply_patch`],
/// keeping the title and timestamp invariants intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// Only fields present in the patch change; absent fields are left
    /// untouched. Called by store adapters as the write-side of
    /// `apply_patch`, with `updated_at` supplied by the store clock.
    pub fn apply_patch(&mut self, patch: &TaskPatch, updated_at: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = updated_at;
    }
}

/// Partial update for a task, PATCH-style.
///
/// Each field is tri-state: `None` means "not provided, leave unchanged".
/// For `description`, `Some(None)` means an explicit null that clears the
/// field, distinguishing "not provided" from "set to null".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title, when provided.
    pub title: Option<TaskTitle>,
    /// Replacement description: absent, explicit null, or a new value.
    pub description: Option<Option<String>>,
    /// Replacement completion flag, when provided.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Returns `true` when no field is provided.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}
