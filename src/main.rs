//! Taskdesk server binary.
//!
//! Wires configuration, logging, metrics, the `PostgreSQL` pool, and the
//! lifecycle service into an axum server. All dependencies are constructed
//! here and passed in explicitly.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskdesk::{
    config::Config,
    http::{self, AppState},
    task::{adapters::postgres::PostgresTaskRepository, services::TaskLifecycleService},
};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .init();

    let metrics_handle = http::metrics::install_recorder()?;

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;
    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = TaskLifecycleService::new(repository, Arc::new(DefaultClock));

    let app = http::router(AppState::new(service)).route(
        "/metrics",
        axum::routing::get(move || std::future::ready(metrics_handle.render())),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "taskdesk listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
