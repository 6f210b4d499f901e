//! HTTP boundary for the task lifecycle service.
//!
//! Maps requests to service calls and service results to status codes and
//! JSON payloads. Successful responses wrap their payload in a `data`
//! envelope; errors are `{"error": ..., "details": [...]}`.

use axum::{Router, middleware, routing::get};
use mockable::Clock;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod ui;


pub use error::ApiError;

/// Shared state handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, C>,
}

// Manual impl: a derive would require `R: Clone` and `C: Clone`, but the
// service clones by bumping its shared handles.
impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates state wrapping the lifecycle service.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, C>) -> Self {
        Self { service }
    }

    /// Returns the lifecycle service.
    #[must_use]
    pub const fn service(&self) -> &TaskLifecycleService<R, C> {
        &self.service
    }
}

/// Builds the API router with all task endpoints mounted at `/api/v1` and
/// the UI page at `/`.
///
/// The `/metrics` endpoint is attached by the binary after installing the
/// Prometheus recorder.
#[must_use]
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(ui::index::<R, C>))
        .route(
            "/api/v1/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/api/v1/tasks/:id",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/ping", get(handlers::ping))
        .layer(middleware::from_fn(metrics::track_requests))
        .with_state(state)
}
