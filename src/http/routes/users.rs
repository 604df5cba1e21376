//! Handlers for registration and user administration.

use super::bodies::UserBody;
use crate::account::domain::UserId;
use crate::account::services::RegisterUserRequest;
use crate::http::extract::CurrentUser;
use crate::http::{ApiError, AppState};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(super) struct RegisterBody {
    username: String,
    password: String,
    #[serde(default)]
    email: Option<String>,
}

/// `POST /api/users/register` - open to anonymous callers.
pub(super) async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<UserBody>), ApiError> {
    let mut request = RegisterUserRequest::new(body.username, body.password);
    if let Some(email) = body.email {
        request = request.with_email(email);
    }
    let user = state.users.register(request).await?;
    Ok((StatusCode::CREATED, Json(UserBody::from(&user))))
}

/// `GET /api/users` - staff only.
pub(super) async fn list(
    State(state): State<AppState>,
    requester: CurrentUser,
) -> Result<Json<Vec<UserBody>>, ApiError> {
    let users = state.users.list(requester.actor()).await?;
    Ok(Json(users.iter().map(UserBody::from).collect()))
}

/// `DELETE /api/users/{id}` - staff only, cascades memberships and
/// assignments.
pub(super) async fn remove(
    State(state): State<AppState>,
    requester: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .users
        .delete(requester.actor(), UserId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
