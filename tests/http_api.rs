//! End-to-end API scenarios over the router with an in-memory store.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes into JSON bodies for assertion clarity"
)]
#![expect(
    clippy::shadow_unrelated,
    reason = "Test code reuses variable names for clarity in sequential assertions"
)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use mockable::DefaultClock;
use serde_json::{Value, json};
use taskdesk::{
    http::{self, AppState},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService},
};
use tower::ServiceExt;

fn app() -> Router {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskLifecycleService::new(repository, Arc::new(DefaultClock));
    http::router(AppState::new(service))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, body)
}

/// Walks a task through the whole API surface: create, read, complete,
/// rewrite, and delete, checking envelopes and status codes along the way.
#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_over_the_api() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/v1/tasks",
        Some(&json!({ "title": "Write report", "description": "quarterly figures" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_i64().expect("id should be i64");
    assert_eq!(created["data"]["completed"], false);

    let (status, fetched) = send(&app, "GET", &format!("/api/v1/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);

    let (status, completed) = send(
        &app,
        "PUT",
        &format!("/api/v1/tasks/{id}"),
        Some(&json!({ "completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["data"]["completed"], true);
    assert_eq!(completed["data"]["description"], "quarterly figures");

    let (status, rewritten) = send(
        &app,
        "PUT",
        &format!("/api/v1/tasks/{id}"),
        Some(&json!({ "title": "File report", "description": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rewritten["data"]["title"], "File report");
    assert_eq!(rewritten["data"]["description"], Value::Null);
    assert_eq!(rewritten["data"]["completed"], true);

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &format!("/api/v1/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// A retried create within the dedup window must not grow the list.
#[tokio::test(flavor = "multi_thread")]
async fn retried_create_does_not_duplicate() {
    let app = app();
    let payload = json!({ "title": "Pay invoice" });

    let (status, first) = send(&app, "POST", "/api/v1/tasks", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, retry) = send(&app, "POST", "/api/v1/tasks", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(retry["data"]["id"], first["data"]["id"]);

    let (_, listed) = send(&app, "GET", "/api/v1/tasks", None).await;
    assert_eq!(
        listed["data"]
            .as_array()
            .expect("data should be an array")
            .len(),
        1
    );
}

/// Malformed payloads are rejected with 422 and per-field detail strings.
#[tokio::test(flavor = "multi_thread")]
async fn validation_failures_carry_details() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/tasks",
        Some(&json!({ "title": "a".repeat(201) })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().expect("details should be array");
    assert_eq!(details.len(), 1);

    let (status, body) = send(&app, "POST", "/api/v1/tasks", Some(&json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation failed");

    // Rejected creates must not persist anything.
    let (status, listed) = send(&app, "GET", "/api/v1/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed["data"]
            .as_array()
            .expect("data should be an array")
            .len(),
        0
    );
}
