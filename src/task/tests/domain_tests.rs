//! Domain-focused tests for task values, status parsing, and assignment.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::account::domain::UserId;
use crate::project::domain::ProjectId;
use crate::task::domain::{
    NewTaskData, Task, TaskDomainError, TaskStatus, TaskTitle,
};
use mockable::DefaultClock;
use rstest::rstest;

fn task(assignee: Option<UserId>) -> Task {
    let title = TaskTitle::new("Wire telemetry").expect("valid title");
    Task::new(
        NewTaskData {
            project_id: ProjectId::new(),
            title,
            description: None,
            assignee,
            status: TaskStatus::default(),
            due_date: None,
        },
        &DefaultClock,
    )
}

#[rstest]
fn title_trims_surrounding_whitespace() {
    let title = TaskTitle::new("  Wire telemetry  ").expect("valid title");
    assert_eq!(title.as_str(), "Wire telemetry");
}

#[rstest]
fn title_rejects_empty() {
    assert_eq!(TaskTitle::new("   "), Err(TaskDomainError::EmptyTaskTitle));
}

#[rstest]
fn title_rejects_overlong_values() {
    let raw = "t".repeat(121);
    assert_eq!(
        TaskTitle::new(&raw),
        Err(TaskDomainError::TaskTitleTooLong(raw))
    );
}

#[rstest]
fn title_length_is_counted_in_characters() {
    let raw = "ż".repeat(120);
    let title = TaskTitle::new(&raw).expect("multibyte title within the limit");
    assert_eq!(title.as_str(), raw);
}

#[rstest]
#[case("TODO", TaskStatus::Todo)]
#[case("IN_PROGRESS", TaskStatus::InProgress)]
#[case("DONE", TaskStatus::Done)]
#[case("done", TaskStatus::Done)]
#[case(" in_progress ", TaskStatus::InProgress)]
fn status_storage_parse_tolerates_case_and_whitespace(
    #[case] raw: &str,
    #[case] expected: TaskStatus,
) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_values() {
    assert!(TaskStatus::try_from("BLOCKED").is_err());
}

#[rstest]
#[case("TODO", TaskStatus::Todo)]
#[case("IN_PROGRESS", TaskStatus::InProgress)]
#[case("DONE", TaskStatus::Done)]
fn status_wire_parse_accepts_exact_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::from_wire(raw), Ok(expected));
}

#[rstest]
#[case("done")]
#[case(" DONE ")]
#[case("in_progress")]
#[case("BLOCKED")]
fn status_wire_parse_rejects_inexact_values(#[case] raw: &str) {
    assert!(TaskStatus::from_wire(raw).is_err());
}

#[rstest]
fn status_round_trips_through_as_str() {
    for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
        assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
    }
}

#[rstest]
fn new_tasks_default_to_todo() {
    assert_eq!(task(None).status(), TaskStatus::Todo);
}

#[rstest]
fn assign_replaces_the_current_assignee() {
    let first = UserId::new();
    let second = UserId::new();
    let mut task = task(Some(first));

    task.assign(second);

    assert_eq!(task.assignee(), Some(second));
}

#[rstest]
fn unassign_requires_the_current_assignee() {
    let assignee = UserId::new();
    let other = UserId::new();
    let mut task = task(Some(assignee));

    assert_eq!(
        task.unassign(other),
        Err(TaskDomainError::AssigneeMismatch(other))
    );
    assert_eq!(task.assignee(), Some(assignee));
}

#[rstest]
fn unassign_rejects_unassigned_tasks() {
    let user = UserId::new();
    let mut task = task(None);

    assert_eq!(
        task.unassign(user),
        Err(TaskDomainError::AssigneeMismatch(user))
    );
}

#[rstest]
fn unassign_clears_a_matching_assignee() {
    let assignee = UserId::new();
    let mut task = task(Some(assignee));

    task.unassign(assignee).expect("unassign should succeed");

    assert_eq!(task.assignee(), None);
}

#[rstest]
fn update_details_replaces_editable_fields() {
    let mut task = task(None);
    let title = TaskTitle::new("Calibrate sensors").expect("valid title");

    task.update_details(
        title,
        Some("Full sweep".to_owned()),
        TaskStatus::InProgress,
        None,
    );

    assert_eq!(task.title().as_str(), "Calibrate sensors");
    assert_eq!(task.description(), Some("Full sweep"));
    assert_eq!(task.status(), TaskStatus::InProgress);
}
