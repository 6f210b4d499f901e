//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title is {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Actual length of the rejected title.
        actual: usize,
    },
}
