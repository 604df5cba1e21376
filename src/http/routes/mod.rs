//! Route table and handler modules.

mod bodies;
mod projects;
mod tasks;
mod tokens;
mod users;

use crate::http::AppState;
use axum::Router;
use axum::routing::{delete, get, patch, post};
use serde_json::json;

/// Builds the route table. Middleware and state are applied by
/// [`crate::http::app`].
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/users/register", post(users::register))
        .route("/api/users", get(users::list))
        .route("/api/users/{id}", delete(users::remove))
        .route("/api/tokens", post(tokens::obtain))
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::detail)
                .put(projects::update)
                .delete(projects::remove),
        )
        .route("/api/projects/{id}/members", post(projects::add_member))
        .route(
            "/api/projects/{id}/members/{user_id}",
            delete(projects::remove_member),
        )
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/{id}",
            get(tasks::detail).put(tasks::update).delete(tasks::remove),
        )
        .route("/api/tasks/{id}/assign", patch(tasks::assign))
        .route("/api/tasks/{id}/unassign", patch(tasks::unassign))
        .route("/api/tasks/{id}/status", patch(tasks::set_status))
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({"status": "ok"}))
}
