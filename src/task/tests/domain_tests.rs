//! Domain type tests for titles, patches, and patch application.

use chrono::TimeDelta;
use rstest::rstest;

use super::fixtures::start_instant;
use crate::task::domain::{
    PersistedTaskData, Task, TaskDomainError, TaskId, TaskPatch, TaskTitle,
};

fn persisted_task(title: &str, description: Option<&str>) -> Task {
    let created_at = start_instant();
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(1),
        title: TaskTitle::new(title).expect("valid test title"),
        description: description.map(ToOwned::to_owned),
        completed: false,
        created_at,
        updated_at: created_at,
    })
}

#[rstest]
#[case("x")]
#[case("Buy milk")]
fn task_title_accepts_valid_lengths(#[case] raw: &str) {
    let title = TaskTitle::new(raw).expect("title should be accepted");
    assert_eq!(title.as_str(), raw);
}

#[test]
fn task_title_accepts_exactly_200_characters() {
    let raw = "é".repeat(200);
    let title = TaskTitle::new(raw.clone()).expect("200-char title should be accepted");
    assert_eq!(title.as_str(), raw);
}

#[test]
fn task_title_rejects_empty_string() {
    assert_eq!(TaskTitle::new(""), Err(TaskDomainError::EmptyTitle));
}

#[test]
fn task_title_rejects_201_characters() {
    let raw = "a".repeat(201);
    assert_eq!(
        TaskTitle::new(raw),
        Err(TaskDomainError::TitleTooLong {
            max: 200,
            actual: 201
        })
    );
}

#[test]
fn task_title_preserves_surrounding_whitespace() {
    // Dedup matches on exact equality, so titles are never trimmed.
    let title = TaskTitle::new("  padded  ").expect("whitespace title should be accepted");
    assert_eq!(title.as_str(), "  padded  ");
}

#[test]
fn apply_patch_changes_only_provided_fields() {
    let mut task = persisted_task("Buy milk", Some("two litres"));
    let later = start_instant() + TimeDelta::seconds(5);

    task.apply_patch(
        &TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        },
        later,
    );

    assert_eq!(task.title().as_str(), "Buy milk");
    assert_eq!(task.description(), Some("two litres"));
    assert!(task.completed());
    assert_eq!(task.updated_at(), later);
    assert_eq!(task.created_at(), start_instant());
}

#[test]
fn apply_patch_clears_description_on_explicit_null() {
    let mut task = persisted_task("Buy milk", Some("two litres"));
    let later = start_instant() + TimeDelta::seconds(5);

    task.apply_patch(
        &TaskPatch {
            description: Some(None),
            ..TaskPatch::default()
        },
        later,
    );

    assert_eq!(task.description(), None);
    assert_eq!(task.title().as_str(), "Buy milk");
}

#[test]
fn apply_patch_replaces_all_provided_fields() {
    let mut task = persisted_task("Buy milk", None);
    let later = start_instant() + TimeDelta::seconds(5);

    task.apply_patch(
        &TaskPatch {
            title: Some(TaskTitle::new("Buy oat milk").expect("valid test title")),
            description: Some(Some("the green carton".to_owned())),
            completed: Some(true),
        },
        later,
    );

    assert_eq!(task.title().as_str(), "Buy oat milk");
    assert_eq!(task.description(), Some("the green carton"));
    assert!(task.completed());
}

#[test]
fn empty_patch_reports_empty() {
    assert!(TaskPatch::default().is_empty());
    let patch = TaskPatch {
        completed: Some(false),
        ..TaskPatch::default()
    };
    assert!(!patch.is_empty());
}
