//! HTTP integration tests for task CRUD, assignment, and status changes.

#![expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "Test code uses expect and indexing for assertion clarity"
)]

mod test_helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};
use test_helpers::{TestApp, test_app};

async fn create_project(app: &TestApp, token: &str, name: &str) -> String {
    let (status, body) = app
        .request(
            "POST",
            "/api/projects",
            Some(token),
            Some(json!({"name": name})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "creation failed: {body}");
    body["id"].as_str().expect("project id").to_owned()
}

async fn create_task(app: &TestApp, token: &str, body: Value) -> Value {
    let (status, task) = app.request("POST", "/api/tasks", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "task creation failed: {task}");
    task
}

#[tokio::test(flavor = "multi_thread")]
async fn create_defaults_to_todo_and_unassigned() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let project_id = create_project(&app, &token, "Apollo").await;

    let task = create_task(
        &app,
        &token,
        json!({"project_id": project_id, "title": "Wire telemetry"}),
    )
    .await;

    assert_eq!(task["status"], "TODO");
    assert_eq!(task["assigned_to"], Value::Null);
    assert_eq!(task["project_id"], project_id);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_titles() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let project_id = create_project(&app, &token, "Apollo").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/tasks",
            Some(&token),
            Some(json!({"project_id": project_id, "title": "   "})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_statuses() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let project_id = create_project(&app, &token, "Apollo").await;

    let (status, _body) = app
        .request(
            "POST",
            "/api/tasks",
            Some(&token),
            Some(json!({
                "project_id": project_id,
                "title": "Task",
                "status": "BLOCKED"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_lowercase_statuses() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let project_id = create_project(&app, &token, "Apollo").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/tasks",
            Some(&token),
            Some(json!({
                "project_id": project_id,
                "title": "Task",
                "status": "done"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_refuses_non_members() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    app.register("bob", "s3cretpass").await;
    let alice_token = app.token("alice", "s3cretpass").await;
    let bob_token = app.token("bob", "s3cretpass").await;
    let project_id = create_project(&app, &alice_token, "Apollo").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/tasks",
            Some(&bob_token),
            Some(json!({"project_id": project_id, "title": "Task"})),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "forbidden");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_in_an_unknown_project_reports_not_found() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;

    let (status, _body) = app
        .request(
            "POST",
            "/api/tasks",
            Some(&token),
            Some(json!({
                "project_id": "00000000-0000-0000-0000-000000000000",
                "title": "Task"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_non_member_assignees() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let bob = app.register("bob", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let project_id = create_project(&app, &token, "Apollo").await;

    let (status, _body) = app
        .request(
            "POST",
            "/api/tasks",
            Some(&token),
            Some(json!({
                "project_id": project_id,
                "title": "Task",
                "assigned_to": bob["id"]
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_is_scoped_and_filterable() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    app.register("bob", "s3cretpass").await;
    let alice_token = app.token("alice", "s3cretpass").await;
    let bob_token = app.token("bob", "s3cretpass").await;
    let apollo = create_project(&app, &alice_token, "Apollo").await;
    let artemis = create_project(&app, &bob_token, "Artemis").await;
    create_task(
        &app,
        &alice_token,
        json!({"project_id": apollo, "title": "Ours", "status": "DONE"}),
    )
    .await;
    create_task(
        &app,
        &alice_token,
        json!({"project_id": apollo, "title": "Also ours"}),
    )
    .await;
    create_task(
        &app,
        &bob_token,
        json!({"project_id": artemis, "title": "Theirs"}),
    )
    .await;

    let (status, body) = app
        .request("GET", "/api/tasks", Some(&alice_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 2);

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/tasks?project_id={apollo}&status=DONE"),
            Some(&alice_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let filtered = body.as_array().expect("array");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["title"], "Ours");
}

#[tokio::test(flavor = "multi_thread")]
async fn staff_see_all_tasks() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let alice_token = app.token("alice", "s3cretpass").await;
    let staff_token = app.seed_staff("admin", "adminpass1").await;
    let apollo = create_project(&app, &alice_token, "Apollo").await;
    create_task(
        &app,
        &alice_token,
        json!({"project_id": apollo, "title": "Task"}),
    )
    .await;

    let (status, body) = app
        .request("GET", "/api/tasks", Some(&staff_token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn tasks_outside_membership_answer_not_found() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    app.register("bob", "s3cretpass").await;
    let alice_token = app.token("alice", "s3cretpass").await;
    let bob_token = app.token("bob", "s3cretpass").await;
    let apollo = create_project(&app, &alice_token, "Apollo").await;
    let task = create_task(
        &app,
        &alice_token,
        json!({"project_id": apollo, "title": "Task"}),
    )
    .await;
    let task_id = task["id"].as_str().expect("task id");

    let (status, body) = app
        .request("GET", &format!("/api/tasks/{task_id}"), Some(&bob_token), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_editable_fields() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let apollo = create_project(&app, &token, "Apollo").await;
    let task = create_task(&app, &token, json!({"project_id": apollo, "title": "Task"})).await;
    let task_id = task["id"].as_str().expect("task id");

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/tasks/{task_id}"),
            Some(&token),
            Some(json!({
                "title": "Calibrate sensors",
                "status": "IN_PROGRESS",
                "due_date": "2026-09-15"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Calibrate sensors");
    assert_eq!(body["status"], "IN_PROGRESS");
    assert_eq!(body["due_date"], "2026-09-15");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let apollo = create_project(&app, &token, "Apollo").await;
    let task = create_task(&app, &token, json!({"project_id": apollo, "title": "Task"})).await;
    let task_id = task["id"].as_str().expect("task id");

    let (status, _body) = app
        .request("DELETE", &format!("/api/tasks/{task_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _body) = app
        .request("GET", &format!("/api/tasks/{task_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_and_unassign_round_trip() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let bob = app.register("bob", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let apollo = create_project(&app, &token, "Apollo").await;
    let bob_id = bob["id"].as_str().expect("id");
    app.request(
        "POST",
        &format!("/api/projects/{apollo}/members"),
        Some(&token),
        Some(json!({"user_id": bob_id})),
    )
    .await;
    let task = create_task(&app, &token, json!({"project_id": apollo, "title": "Task"})).await;
    let task_id = task["id"].as_str().expect("task id");

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/tasks/{task_id}/assign"),
            Some(&token),
            Some(json!({"user_id": bob_id})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assigned_to"]["username"], "bob");

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/tasks/{task_id}/unassign"),
            Some(&token),
            Some(json!({"user_id": bob_id})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assigned_to"], Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_rejects_non_members() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let bob = app.register("bob", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let apollo = create_project(&app, &token, "Apollo").await;
    let task = create_task(&app, &token, json!({"project_id": apollo, "title": "Task"})).await;
    let task_id = task["id"].as_str().expect("task id");

    let (status, _body) = app
        .request(
            "PATCH",
            &format!("/api/tasks/{task_id}/assign"),
            Some(&token),
            Some(json!({"user_id": bob["id"]})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn unassign_rejects_a_mismatched_user() {
    let app = test_app();
    let alice = app.register("alice", "s3cretpass").await;
    let bob = app.register("bob", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let apollo = create_project(&app, &token, "Apollo").await;
    let bob_id = bob["id"].as_str().expect("id");
    app.request(
        "POST",
        &format!("/api/projects/{apollo}/members"),
        Some(&token),
        Some(json!({"user_id": bob_id})),
    )
    .await;
    let task = create_task(
        &app,
        &token,
        json!({"project_id": apollo, "title": "Task", "assigned_to": bob_id}),
    )
    .await;
    let task_id = task["id"].as_str().expect("task id");

    let (status, _body) = app
        .request(
            "PATCH",
            &format!("/api/tasks/{task_id}/unassign"),
            Some(&token),
            Some(json!({"user_id": alice["id"]})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn status_endpoint_updates_the_workflow_state() {
    let app = test_app();
    app.register("alice", "s3cretpass").await;
    let token = app.token("alice", "s3cretpass").await;
    let apollo = create_project(&app, &token, "Apollo").await;
    let task = create_task(&app, &token, json!({"project_id": apollo, "title": "Task"})).await;
    let task_id = task["id"].as_str().expect("task id");

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/tasks/{task_id}/status"),
            Some(&token),
            Some(json!({"status": "DONE"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "DONE");

    let (status, _body) = app
        .request(
            "PATCH",
            &format!("/api/tasks/{task_id}/status"),
            Some(&token),
            Some(json!({"status": "BLOCKED"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
