//! Handlers for project CRUD and membership management.

use super::bodies::ProjectBody;
use crate::account::domain::UserId;
use crate::http::extract::CurrentUser;
use crate::http::{ApiError, AppState};
use crate::project::domain::ProjectId;
use crate::project::services::{CreateProjectRequest, UpdateProjectRequest};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(super) struct ProjectWriteBody {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddMemberBody {
    user_id: Uuid,
}

/// `GET /api/projects` - projects the requester belongs to; staff see all.
pub(super) async fn list(
    State(state): State<AppState>,
    requester: CurrentUser,
) -> Result<Json<Vec<ProjectBody>>, ApiError> {
    let details = state.projects.list(requester.actor()).await?;
    Ok(Json(details.iter().map(ProjectBody::from).collect()))
}

/// `POST /api/projects` - creates a project with the requester as first
/// member.
pub(super) async fn create(
    State(state): State<AppState>,
    requester: CurrentUser,
    Json(body): Json<ProjectWriteBody>,
) -> Result<(StatusCode, Json<ProjectBody>), ApiError> {
    let mut request = CreateProjectRequest::new(body.name);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let detail = state.projects.create(requester.actor(), request).await?;
    Ok((StatusCode::CREATED, Json(ProjectBody::from(&detail))))
}

/// `GET /api/projects/{id}` - member or staff only.
pub(super) async fn detail(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectBody>, ApiError> {
    let detail = state
        .projects
        .get(requester.actor(), ProjectId::from_uuid(id))
        .await?;
    Ok(Json(ProjectBody::from(&detail)))
}

/// `PUT /api/projects/{id}` - replaces name and description.
pub(super) async fn update(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ProjectWriteBody>,
) -> Result<Json<ProjectBody>, ApiError> {
    let mut request = UpdateProjectRequest::new(body.name);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let detail = state
        .projects
        .update(requester.actor(), ProjectId::from_uuid(id), request)
        .await?;
    Ok(Json(ProjectBody::from(&detail)))
}

/// `DELETE /api/projects/{id}` - deletes the project and its tasks.
pub(super) async fn remove(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .projects
        .delete(requester.actor(), ProjectId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/projects/{id}/members` - adds a user to the roster.
pub(super) async fn add_member(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AddMemberBody>,
) -> Result<Json<ProjectBody>, ApiError> {
    let detail = state
        .projects
        .add_member(
            requester.actor(),
            ProjectId::from_uuid(id),
            UserId::from_uuid(body.user_id),
        )
        .await?;
    Ok(Json(ProjectBody::from(&detail)))
}

/// `DELETE /api/projects/{id}/members/{user_id}` - removes a user from the
/// roster and clears their assignments in the project.
pub(super) async fn remove_member(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ProjectBody>, ApiError> {
    let detail = state
        .projects
        .remove_member(
            requester.actor(),
            ProjectId::from_uuid(id),
            UserId::from_uuid(user_id),
        )
        .await?;
    Ok(Json(ProjectBody::from(&detail)))
}
