//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
///
/// Identifier, completion flag, and both timestamps come from column
/// defaults so the store remains the sole authority for them.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Changeset for partial updates.
///
/// `Option` fields are skipped when `None`; the nested option on
/// `description` distinguishes "leave unchanged" from "set to NULL".
/// `updated_at` is not part of the changeset: the repository refreshes it
/// from the database clock, the same authority that stamps inserts.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title, when provided.
    pub title: Option<String>,
    /// Replacement description: skip, clear, or set.
    pub description: Option<Option<String>>,
    /// Replacement completion flag, when provided.
    pub completed: Option<bool>,
}
