//! Server-rendered UI page.

#![expect(
    clippy::needless_pass_by_value,
    reason = "axum extractors are consumed by value in handler signatures"
)]

use axum::{extract::State, response::Html};
use minijinja::{Environment, context};
use mockable::Clock;

use super::{AppState, error::ApiError};
use crate::task::ports::TaskRepository;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Renders the task list page.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] when the store read fails or
/// [`ApiError::Template`] when rendering fails.
pub async fn index<R, C>(State(state): State<AppState<R, C>>) -> Result<Html<String>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service().list().await?;

    let mut environment = Environment::new();
    environment.add_template("index", INDEX_TEMPLATE)?;
    let template = environment.get_template("index")?;
    let rendered = template.render(context! { tasks => tasks })?;
    Ok(Html(rendered))
}
