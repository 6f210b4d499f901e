//! Request metrics middleware and Prometheus recorder setup.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Installs the process-global Prometheus recorder and returns the render
/// handle for the `/metrics` endpoint.
///
/// Call once at startup; test routers skip this and run without a recorder
/// (the macros become no-ops).
///
/// # Errors
///
/// Returns [`BuildError`] when a recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Records request count, error count, and latency for every request,
/// labelled by method, matched route, and status.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let endpoint = request.extensions().get::<MatchedPath>().map_or_else(
        || request.uri().path().to_owned(),
        |path| path.as_str().to_owned(),
    );
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "taskdesk_api_request_count",
        "method" => method.clone(),
        "endpoint" => endpoint.clone(),
        "http_status" => status.clone(),
    )
    .increment(1);
    if response.status().is_client_error() || response.status().is_server_error() {
        counter!(
            "taskdesk_api_error_count",
            "method" => method.clone(),
            "endpoint" => endpoint.clone(),
            "http_status" => status,
        )
        .increment(1);
    }
    histogram!(
        "taskdesk_api_request_latency_seconds",
        "method" => method,
        "endpoint" => endpoint,
    )
    .record(start.elapsed().as_secs_f64());

    response
}
