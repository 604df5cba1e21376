//! Service orchestration tests for the project catalog.

#![expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "Test code uses expect and indexing for assertion clarity"
)]

use crate::account::{
    adapters::memory::InMemoryUserRepository,
    domain::{User, UserId, Username},
    ports::UserRepository,
};
use crate::auth::password;
use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{ProjectDomainError, ProjectId},
    ports::ProjectRepositoryError,
    services::{
        CreateProjectRequest, ProjectCatalogError, ProjectCatalogService, UpdateProjectRequest,
    },
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    ports::{TaskFilter, TaskRepository},
    services::{CreateTaskRequest, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

struct Harness {
    users: Arc<InMemoryUserRepository>,
    tasks: Arc<InMemoryTaskRepository>,
    board: TaskBoardService,
    service: ProjectCatalogService,
}

#[fixture]
fn harness() -> Harness {
    let users = Arc::new(InMemoryUserRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);
    let board = TaskBoardService::new(
        tasks.clone(),
        projects.clone(),
        users.clone(),
        clock.clone(),
    );
    let service = ProjectCatalogService::new(projects, users.clone(), board.clone(), clock);
    Harness {
        users,
        tasks,
        board,
        service,
    }
}

async fn seed_user(harness: &Harness, name: &str) -> User {
    let username = Username::new(name).expect("valid username");
    let hash = password::hash("irrelevant-pw").expect("hashing should succeed");
    let user = User::new(username, None, hash, &DefaultClock);
    harness
        .users
        .store(&user)
        .await
        .expect("storing user should succeed");
    user
}

async fn seed_staff(harness: &Harness, name: &str) -> User {
    let username = Username::new(name).expect("valid username");
    let hash = password::hash("irrelevant-pw").expect("hashing should succeed");
    let user = User::new_staff(username, None, hash, &DefaultClock);
    harness
        .users
        .store(&user)
        .await
        .expect("storing staff user should succeed");
    user
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_makes_the_requester_the_first_member(harness: Harness) {
    let user = seed_user(&harness, "alice").await;

    let detail = harness
        .service
        .create(user.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    assert_eq!(detail.project.members(), &[user.id()]);
    assert_eq!(detail.members.len(), 1);
    assert_eq!(detail.members[0].id(), user.id());
    assert!(detail.tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_names(harness: Harness) {
    let user = seed_user(&harness, "alice").await;

    let result = harness
        .service
        .create(user.actor(), CreateProjectRequest::new("   "))
        .await;

    assert!(matches!(
        result,
        Err(ProjectCatalogError::Domain(
            ProjectDomainError::EmptyProjectName
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_scoped_to_membership(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let bob = seed_user(&harness, "bob").await;
    harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");
    harness
        .service
        .create(bob.actor(), CreateProjectRequest::new("Artemis"))
        .await
        .expect("creation should succeed");

    let visible = harness
        .service
        .list(alice.actor())
        .await
        .expect("listing should succeed");

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].project.name().as_str(), "Apollo");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn staff_see_every_project(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let staff = seed_staff(&harness, "admin").await;
    harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    let visible = harness
        .service
        .list(staff.actor())
        .await
        .expect("listing should succeed");

    assert_eq!(visible.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_refuses_non_members(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let bob = seed_user(&harness, "bob").await;
    let detail = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    let result = harness.service.get(bob.actor(), detail.project.id()).await;
    assert!(matches!(
        result,
        Err(ProjectCatalogError::AccessDenied(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_project_reports_not_found(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;

    let result = harness.service.get(alice.actor(), ProjectId::new()).await;
    assert!(matches!(
        result,
        Err(ProjectCatalogError::Repository(
            ProjectRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_name_and_description(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let created = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    let updated = harness
        .service
        .update(
            alice.actor(),
            created.project.id(),
            UpdateProjectRequest::new("Artemis").with_description("Return to the moon"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.project.name().as_str(), "Artemis");
    assert_eq!(updated.project.description(), Some("Return to the moon"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_cascades_to_tasks(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let detail = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");
    harness
        .board
        .create(
            alice.actor(),
            CreateTaskRequest::new(detail.project.id(), "Wire telemetry"),
        )
        .await
        .expect("task creation should succeed");

    harness
        .service
        .delete(alice.actor(), detail.project.id())
        .await
        .expect("deletion should succeed");

    let remaining = harness
        .tasks
        .list(&TaskFilter::default())
        .await
        .expect("task listing should succeed");
    assert!(remaining.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_appends_to_the_roster(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let bob = seed_user(&harness, "bob").await;
    let detail = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    let updated = harness
        .service
        .add_member(alice.actor(), detail.project.id(), bob.id())
        .await
        .expect("adding should succeed");

    assert_eq!(updated.project.members(), &[alice.id(), bob.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_rejects_unknown_users(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let detail = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    let result = harness
        .service
        .add_member(alice.actor(), detail.project.id(), UserId::new())
        .await;
    assert!(matches!(result, Err(ProjectCatalogError::UnknownUser(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_member_rejects_existing_members(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let detail = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    let result = harness
        .service
        .add_member(alice.actor(), detail.project.id(), alice.id())
        .await;
    assert!(matches!(
        result,
        Err(ProjectCatalogError::Domain(
            ProjectDomainError::AlreadyMember(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_member_clears_their_assignments_in_the_project(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let bob = seed_user(&harness, "bob").await;
    let detail = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");
    harness
        .service
        .add_member(alice.actor(), detail.project.id(), bob.id())
        .await
        .expect("adding should succeed");
    let task = harness
        .board
        .create(
            alice.actor(),
            CreateTaskRequest::new(detail.project.id(), "Wire telemetry")
                .with_assignee(bob.id()),
        )
        .await
        .expect("task creation should succeed");

    let updated = harness
        .service
        .remove_member(alice.actor(), detail.project.id(), bob.id())
        .await
        .expect("removal should succeed");

    assert_eq!(updated.project.members(), &[alice.id()]);
    let refreshed = harness
        .tasks
        .find_by_id(task.task.id())
        .await
        .expect("task lookup should succeed")
        .expect("task should remain");
    assert_eq!(refreshed.assignee(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_member_rejects_absent_users(harness: Harness) {
    let alice = seed_user(&harness, "alice").await;
    let bob = seed_user(&harness, "bob").await;
    let detail = harness
        .service
        .create(alice.actor(), CreateProjectRequest::new("Apollo"))
        .await
        .expect("creation should succeed");

    let result = harness
        .service
        .remove_member(alice.actor(), detail.project.id(), bob.id())
        .await;
    assert!(matches!(
        result,
        Err(ProjectCatalogError::Domain(
            ProjectDomainError::NotAMember(_)
        ))
    ));
}
