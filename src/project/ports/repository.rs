//! Repository port for project persistence, lookup, and membership queries.

use crate::account::domain::UserId;
use crate::project::domain::{Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Implementations persist the membership roster together with the
/// aggregate; `update` replaces the stored roster with the aggregate's
/// current one.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project and its membership roster.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the
    /// project ID already exists.
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Persists changes to an existing project (details and roster).
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns all projects ordered by creation time.
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Returns projects the given user is a member of, ordered by creation
    /// time.
    async fn list_for_member(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<Project>>;

    /// Deletes a project and its membership roster.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()>;

    /// Removes the given user from every project roster they appear on.
    ///
    /// Used when a user account is deleted. Projects themselves survive,
    /// even when left without members.
    async fn remove_member_from_all(&self, user_id: UserId) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
