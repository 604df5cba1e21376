//! Shared state for the Axum application.

use crate::account::services::UserDirectoryService;
use crate::auth::TokenService;
use crate::project::services::ProjectCatalogService;
use crate::task::services::TaskBoardService;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// User registration, credentials, and administration.
    pub users: UserDirectoryService,
    /// Project CRUD and membership management.
    pub projects: ProjectCatalogService,
    /// Task CRUD, assignment, and status tracking.
    pub tasks: TaskBoardService,
    /// Bearer-token issuance and verification.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates the application state from wired services.
    #[must_use]
    pub const fn new(
        users: UserDirectoryService,
        projects: ProjectCatalogService,
        tasks: TaskBoardService,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            projects,
            tasks,
            tokens,
        }
    }
}
