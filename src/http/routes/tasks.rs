//! Handlers for task CRUD, assignment, and status changes.

use super::bodies::TaskBody;
use crate::account::domain::UserId;
use crate::http::extract::CurrentUser;
use crate::http::{ApiError, AppState};
use crate::project::domain::ProjectId;
use crate::task::domain::{TaskId, TaskStatus};
use crate::task::services::{CreateTaskRequest, TaskQuery, UpdateTaskRequest};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(super) struct TaskCreateBody {
    project_id: Uuid,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    assigned_to: Option<Uuid>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TaskUpdateBody {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AssignmentBody {
    user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatusBody {
    status: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TaskListParams {
    #[serde(default)]
    project_id: Option<Uuid>,
    #[serde(default)]
    status: Option<String>,
}

/// Parses an optional wire-format status, defaulting when absent.
fn parse_status(value: Option<&str>) -> Result<TaskStatus, ApiError> {
    value.map_or_else(
        || Ok(TaskStatus::default()),
        |raw| TaskStatus::from_wire(raw).map_err(|err| ApiError::Validation(err.to_string())),
    )
}

/// `GET /api/tasks` - tasks in the requester's projects; staff see all.
pub(super) async fn list(
    State(state): State<AppState>,
    requester: CurrentUser,
    Query(params): Query<TaskListParams>,
) -> Result<Json<Vec<TaskBody>>, ApiError> {
    let status = params
        .status
        .as_deref()
        .map(TaskStatus::from_wire)
        .transpose()
        .map_err(|err| ApiError::Validation(err.to_string()))?;
    let query = TaskQuery {
        project: params.project_id.map(ProjectId::from_uuid),
        status,
    };
    let details = state.tasks.list(requester.actor(), query).await?;
    Ok(Json(details.iter().map(TaskBody::from).collect()))
}

/// `POST /api/tasks` - creates a task in a project the requester belongs
/// to.
pub(super) async fn create(
    State(state): State<AppState>,
    requester: CurrentUser,
    Json(body): Json<TaskCreateBody>,
) -> Result<(StatusCode, Json<TaskBody>), ApiError> {
    let status = parse_status(body.status.as_deref())?;
    let mut request = CreateTaskRequest::new(ProjectId::from_uuid(body.project_id), body.title)
        .with_status(status);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(assignee) = body.assigned_to {
        request = request.with_assignee(UserId::from_uuid(assignee));
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }
    let detail = state.tasks.create(requester.actor(), request).await?;
    Ok((StatusCode::CREATED, Json(TaskBody::from(&detail))))
}

/// `GET /api/tasks/{id}` - visible tasks only; others answer not-found.
pub(super) async fn detail(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskBody>, ApiError> {
    let detail = state
        .tasks
        .get(requester.actor(), TaskId::from_uuid(id))
        .await?;
    Ok(Json(TaskBody::from(&detail)))
}

/// `PUT /api/tasks/{id}` - replaces title, description, status, and due
/// date.
pub(super) async fn update(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<TaskUpdateBody>,
) -> Result<Json<TaskBody>, ApiError> {
    let status = parse_status(body.status.as_deref())?;
    let mut request = UpdateTaskRequest::new(body.title, status);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }
    let detail = state
        .tasks
        .update(requester.actor(), TaskId::from_uuid(id), request)
        .await?;
    Ok(Json(TaskBody::from(&detail)))
}

/// `DELETE /api/tasks/{id}` - deletes a visible task.
pub(super) async fn remove(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .tasks
        .delete(requester.actor(), TaskId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/tasks/{id}/assign` - assigns the task to a project member.
pub(super) async fn assign(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignmentBody>,
) -> Result<Json<TaskBody>, ApiError> {
    let detail = state
        .tasks
        .assign(
            requester.actor(),
            TaskId::from_uuid(id),
            UserId::from_uuid(body.user_id),
        )
        .await?;
    Ok(Json(TaskBody::from(&detail)))
}

/// `PATCH /api/tasks/{id}/unassign` - clears the assignment, verifying
/// the named user is the current assignee.
pub(super) async fn unassign(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignmentBody>,
) -> Result<Json<TaskBody>, ApiError> {
    let detail = state
        .tasks
        .unassign(
            requester.actor(),
            TaskId::from_uuid(id),
            UserId::from_uuid(body.user_id),
        )
        .await?;
    Ok(Json(TaskBody::from(&detail)))
}

/// `PATCH /api/tasks/{id}/status` - sets the workflow status.
pub(super) async fn set_status(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<StatusBody>,
) -> Result<Json<TaskBody>, ApiError> {
    let status = TaskStatus::from_wire(body.status.as_str())
        .map_err(|err| ApiError::Validation(err.to_string()))?;
    let detail = state
        .tasks
        .set_status(requester.actor(), TaskId::from_uuid(id), status)
        .await?;
    Ok(Json(TaskBody::from(&detail)))
}
