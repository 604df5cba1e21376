//! Service layer for project CRUD and membership management.
//!
//! Authorization rules:
//!
//! - Listing shows only projects the requester is a member of; staff see
//!   every project.
//! - Detail, update, delete, and membership changes require membership or
//!   staff privileges. Unlike task visibility, non-members receive an
//!   explicit refusal rather than a not-found answer.
//! - The creator of a project automatically becomes its first member.

use crate::account::domain::{Actor, User, UserId};
use crate::account::ports::{UserRepository, UserRepositoryError};
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::services::{TaskBoardError, TaskBoardService, TaskDetail};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for replacing a project's name and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    name: String,
    description: Option<String>,
}

impl UpdateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A project together with its resolved members and tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    /// The project aggregate.
    pub project: Project,
    /// Member bodies in roster order.
    pub members: Vec<User>,
    /// The project's tasks with resolved assignees.
    pub tasks: Vec<TaskDetail>,
}

/// Service-level errors for project catalog operations.
#[derive(Debug, Error)]
pub enum ProjectCatalogError {
    /// Domain validation or roster rule failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// User repository operation failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Task board operation failed during cascade cleanup or nested body
    /// assembly.
    #[error(transparent)]
    Board(#[from] TaskBoardError),
    /// The requester may not access this project.
    #[error("access to project {0} denied")]
    AccessDenied(ProjectId),
    /// The named user does not exist.
    #[error("user not found: {0}")]
    UnknownUser(UserId),
}

/// Result type for project catalog service operations.
pub type ProjectCatalogResult<T> = Result<T, ProjectCatalogError>;

/// Project catalog orchestration service.
#[derive(Clone)]
pub struct ProjectCatalogService {
    projects: Arc<dyn ProjectRepository>,
    users: Arc<dyn UserRepository>,
    board: TaskBoardService,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl ProjectCatalogService {
    /// Creates a new project catalog service.
    ///
    /// The task board service is used to resolve nested task bodies and to
    /// cascade task deletion when a project is removed.
    #[must_use]
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        users: Arc<dyn UserRepository>,
        board: TaskBoardService,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            projects,
            users,
            board,
            clock,
        }
    }

    /// Creates a project with the requester as its first member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError`] when the name is invalid or
    /// persistence fails.
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateProjectRequest,
    ) -> ProjectCatalogResult<ProjectDetail> {
        let name = ProjectName::new(request.name)?;
        let project = Project::new(name, request.description, actor.user_id(), &*self.clock);
        self.projects.store(&project).await?;
        self.resolve_detail(project).await
    }

    /// Lists projects visible to the requester.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError`] when a repository operation fails.
    pub async fn list(&self, actor: Actor) -> ProjectCatalogResult<Vec<ProjectDetail>> {
        let projects = if actor.is_staff() {
            self.projects.list_all().await?
        } else {
            self.projects.list_for_member(actor.user_id()).await?
        };

        let mut details = Vec::with_capacity(projects.len());
        for project in projects {
            details.push(self.resolve_detail(project).await?);
        }
        Ok(details)
    }

    /// Retrieves a project the requester may access.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::AccessDenied`] for non-member,
    /// non-staff requesters, or a not-found repository error when the
    /// project does not exist.
    pub async fn get(&self, actor: Actor, id: ProjectId) -> ProjectCatalogResult<ProjectDetail> {
        let project = self.load_accessible(actor, id).await?;
        self.resolve_detail(project).await
    }

    /// Replaces a project's name and description.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::AccessDenied`] for non-member,
    /// non-staff requesters, or a domain error when the new name is
    /// invalid.
    pub async fn update(
        &self,
        actor: Actor,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> ProjectCatalogResult<ProjectDetail> {
        let mut project = self.load_accessible(actor, id).await?;
        let name = ProjectName::new(request.name)?;
        project.update_details(name, request.description);
        self.projects.update(&project).await?;
        self.resolve_detail(project).await
    }

    /// Deletes a project and all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::AccessDenied`] for non-member,
    /// non-staff requesters.
    pub async fn delete(&self, actor: Actor, id: ProjectId) -> ProjectCatalogResult<()> {
        let project = self.load_accessible(actor, id).await?;
        self.board.delete_for_project(project.id()).await?;
        self.projects.delete(project.id()).await?;
        Ok(())
    }

    /// Adds a user to the project roster.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::UnknownUser`] when the user does not
    /// exist, or [`ProjectDomainError::AlreadyMember`] when they are
    /// already on the roster.
    pub async fn add_member(
        &self,
        actor: Actor,
        id: ProjectId,
        user_id: UserId,
    ) -> ProjectCatalogResult<ProjectDetail> {
        let mut project = self.load_accessible(actor, id).await?;
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ProjectCatalogError::UnknownUser(user_id));
        }
        project.add_member(user_id)?;
        self.projects.update(&project).await?;
        self.resolve_detail(project).await
    }

    /// Removes a user from the project roster and clears their assignment
    /// on the project's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotAMember`] when the user is not on
    /// the roster.
    pub async fn remove_member(
        &self,
        actor: Actor,
        id: ProjectId,
        user_id: UserId,
    ) -> ProjectCatalogResult<ProjectDetail> {
        let mut project = self.load_accessible(actor, id).await?;
        project.remove_member(user_id)?;
        self.projects.update(&project).await?;
        self.board
            .clear_assignee_in_project(project.id(), user_id)
            .await?;
        self.resolve_detail(project).await
    }

    /// Loads a project, enforcing membership-or-staff access.
    async fn load_accessible(
        &self,
        actor: Actor,
        id: ProjectId,
    ) -> ProjectCatalogResult<Project> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        if !actor.is_staff() && !project.is_member(actor.user_id()) {
            return Err(ProjectCatalogError::AccessDenied(id));
        }
        Ok(project)
    }

    /// Resolves member and task bodies for a project.
    async fn resolve_detail(&self, project: Project) -> ProjectCatalogResult<ProjectDetail> {
        let mut members = Vec::with_capacity(project.members().len());
        for member_id in project.members() {
            if let Some(user) = self.users.find_by_id(*member_id).await? {
                members.push(user);
            }
        }
        let tasks = self.board.tasks_for_project(project.id()).await?;
        Ok(ProjectDetail {
            project,
            members,
            tasks,
        })
    }
}
