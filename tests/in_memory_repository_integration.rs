//! Behavioural integration tests for [`InMemoryTaskRepository`].
//!
//! These tests exercise the in-memory repository in realistic higher-level
//! flows, verifying that it honours the repository contract the lifecycle
//! service relies on.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn title(raw: &str) -> TaskTitle {
    TaskTitle::new(raw).expect("valid test title")
}

/// Walks a task through its full life: insert, list, patch, delete.
#[test]
fn full_task_life_through_repository() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();

    let created = rt
        .block_on(repo.insert(&title("Write report"), Some("quarterly figures")))
        .expect("insert should succeed");
    assert!(!created.completed());
    assert_eq!(created.updated_at(), created.created_at());

    let listed = rt
        .block_on(repo.list_newest_first())
        .expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);

    let patch = TaskPatch {
        completed: Some(true),
        ..TaskPatch::default()
    };
    let patched = rt
        .block_on(repo.apply_patch(created.id(), &patch))
        .expect("patch should succeed");
    assert!(patched.completed());
    assert_eq!(patched.title().as_str(), "Write report");
    assert!(patched.updated_at() >= created.updated_at());

    rt.block_on(repo.delete(created.id()))
        .expect("delete should succeed");
    let after = rt
        .block_on(repo.find_by_id(created.id()))
        .expect("lookup should succeed");
    assert_eq!(after, None);
}

/// Sequential inserts receive increasing identifiers and list newest first.
#[test]
fn inserts_assign_sequential_ids_and_list_newest_first() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();

    let first = rt
        .block_on(repo.insert(&title("First"), None))
        .expect("insert should succeed");
    let second = rt
        .block_on(repo.insert(&title("Second"), None))
        .expect("insert should succeed");
    let third = rt
        .block_on(repo.insert(&title("Third"), None))
        .expect("insert should succeed");

    assert!(first.id() < second.id());
    assert!(second.id() < third.id());

    let listed = rt
        .block_on(repo.list_newest_first())
        .expect("list should succeed");
    let ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![third.id(), second.id(), first.id()]);
}

/// The duplicate lookup matches title and description exactly, including a
/// missing description, and respects the window cutoff.
#[test]
fn duplicate_lookup_matches_exactly_within_window() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();

    let inserted = rt
        .block_on(repo.insert(&title("Buy milk"), None))
        .expect("insert should succeed");

    let window_start = Utc::now() - TimeDelta::seconds(2);
    let hit = rt
        .block_on(repo.find_recent_duplicate(&title("Buy milk"), None, window_start))
        .expect("lookup should succeed");
    assert_eq!(hit, Some(inserted));

    let different_description = rt
        .block_on(repo.find_recent_duplicate(
            &title("Buy milk"),
            Some("two litres"),
            window_start,
        ))
        .expect("lookup should succeed");
    assert_eq!(different_description, None);

    let future_window = Utc::now() + TimeDelta::seconds(60);
    let expired = rt
        .block_on(repo.find_recent_duplicate(&title("Buy milk"), None, future_window))
        .expect("lookup should succeed");
    assert_eq!(expired, None);
}

/// Patch and delete surface `NotFound` for identifiers that never existed.
#[test]
fn writes_against_unknown_ids_report_not_found() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let unknown = TaskId::new(404);

    let patch_result = rt.block_on(repo.apply_patch(unknown, &TaskPatch::default()));
    assert!(matches!(
        patch_result,
        Err(TaskRepositoryError::NotFound(id)) if id == unknown
    ));

    let delete_result = rt.block_on(repo.delete(unknown));
    assert!(matches!(
        delete_result,
        Err(TaskRepositoryError::NotFound(id)) if id == unknown
    ));
}

/// The repository is shareable across clones; writes through one handle are
/// visible through the other.
#[test]
fn clones_share_underlying_state() {
    let rt = test_runtime();
    let repo = Arc::new(InMemoryTaskRepository::new());
    let other = Arc::clone(&repo);

    let created = rt
        .block_on(repo.insert(&title("Shared"), None))
        .expect("insert should succeed");

    let seen = rt
        .block_on(other.find_by_id(created.id()))
        .expect("lookup should succeed");
    assert_eq!(seen, Some(created));
}
