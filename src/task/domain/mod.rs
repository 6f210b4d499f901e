//! Domain model for task lifecycle management.
//!
//! Models the task record, its validated scalars, and partial-update values
//! while keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskPatch};
