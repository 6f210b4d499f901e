//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, DUPLICATE_WINDOW_SECONDS, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
