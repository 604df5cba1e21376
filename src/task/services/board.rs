//! Service layer for task creation, visibility, assignment, and status.
//!
//! Authorization rules:
//!
//! - Creating a task requires membership of the target project (staff
//!   bypass). A non-member requester is refused outright.
//! - Reading or mutating an existing task is visibility-scoped: tasks in
//!   projects the requester is not a member of behave as if they do not
//!   exist. This deliberately differs from project detail access, which
//!   refuses non-members without hiding the project.
//! - An assignee must always be a member of the task's project.

use crate::account::domain::{Actor, User, UserId};
use crate::account::ports::{UserRepository, UserRepositoryError};
use crate::project::domain::{Project, ProjectId};
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::{
    domain::{NewTaskData, Task, TaskDomainError, TaskId, TaskStatus, TaskTitle},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assignee: Option<UserId>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            assignee: None,
            status: TaskStatus::default(),
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial assignee.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assignee = Some(user_id);
        self
    }

    /// Sets the initial workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for replacing a task's editable details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
}

impl UpdateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Listing criteria accepted by [`TaskBoardService::list`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Restrict to a single project.
    pub project: Option<ProjectId>,
    /// Restrict to tasks with this status.
    pub status: Option<TaskStatus>,
}

/// A task together with its resolved assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetail {
    /// The task aggregate.
    pub task: Task,
    /// The resolved assignee, when one is set and still exists.
    pub assignee: Option<User>,
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// User repository operation failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// The target project does not exist.
    #[error("project not found: {0}")]
    UnknownProject(ProjectId),
    /// The requester is not a member of the target project.
    #[error("requester is not a member of project {0}")]
    NotProjectMember(ProjectId),
    /// The requested assignee is not a member of the task's project.
    #[error("user {user_id} is not a member of project {project_id}")]
    AssigneeNotMember {
        /// The rejected assignee.
        user_id: UserId,
        /// The task's project.
        project_id: ProjectId,
    },
    /// The task does not exist or is not visible to the requester.
    #[error("task not found: {0}")]
    NotVisible(TaskId),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService {
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskBoardService {
    /// Creates a new task board service.
    #[must_use]
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        projects: Arc<dyn ProjectRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            tasks,
            projects,
            users,
            clock,
        }
    }

    /// Creates a task in a project the requester is a member of.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::UnknownProject`] when the project does not
    /// exist, [`TaskBoardError::NotProjectMember`] when the requester is
    /// neither a member nor staff, or
    /// [`TaskBoardError::AssigneeNotMember`] when the initial assignee is
    /// not a member of the project.
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateTaskRequest,
    ) -> TaskBoardResult<TaskDetail> {
        let project = self
            .projects
            .find_by_id(request.project_id)
            .await?
            .ok_or(TaskBoardError::UnknownProject(request.project_id))?;

        if !actor.is_staff() && !project.is_member(actor.user_id()) {
            return Err(TaskBoardError::NotProjectMember(project.id()));
        }
        if let Some(assignee) = request.assignee {
            ensure_assignable(&project, assignee)?;
        }

        let title = TaskTitle::new(request.title)?;
        let task = Task::new(
            NewTaskData {
                project_id: request.project_id,
                title,
                description: request.description,
                assignee: request.assignee,
                status: request.status,
                due_date: request.due_date,
            },
            &*self.clock,
        );
        self.tasks.store(&task).await?;
        self.resolve_detail(task).await
    }

    /// Lists tasks visible to the requester, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when a repository operation fails.
    pub async fn list(&self, actor: Actor, query: TaskQuery) -> TaskBoardResult<Vec<TaskDetail>> {
        let project_ids = if actor.is_staff() {
            None
        } else {
            let memberships = self.projects.list_for_member(actor.user_id()).await?;
            Some(memberships.iter().map(Project::id).collect())
        };

        let filter = TaskFilter {
            project_ids,
            project: query.project,
            status: query.status,
        };
        let tasks = self.tasks.list(&filter).await?;

        let mut details = Vec::with_capacity(tasks.len());
        for task in tasks {
            details.push(self.resolve_detail(task).await?);
        }
        Ok(details)
    }

    /// Retrieves a visible task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotVisible`] when the task does not exist
    /// or the requester may not see it.
    pub async fn get(&self, actor: Actor, id: TaskId) -> TaskBoardResult<TaskDetail> {
        let (task, _project) = self.load_visible(actor, id).await?;
        self.resolve_detail(task).await
    }

    /// Replaces a visible task's editable details.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotVisible`] when the task is not visible
    /// to the requester, or a domain error when the new title is invalid.
    pub async fn update(
        &self,
        actor: Actor,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskBoardResult<TaskDetail> {
        let (mut task, _project) = self.load_visible(actor, id).await?;
        let title = TaskTitle::new(request.title)?;
        task.update_details(title, request.description, request.status, request.due_date);
        self.tasks.update(&task).await?;
        self.resolve_detail(task).await
    }

    /// Deletes a visible task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotVisible`] when the task is not visible
    /// to the requester.
    pub async fn delete(&self, actor: Actor, id: TaskId) -> TaskBoardResult<()> {
        let (task, _project) = self.load_visible(actor, id).await?;
        self.tasks.delete(task.id()).await?;
        Ok(())
    }

    /// Assigns a visible task to a member of its project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::AssigneeNotMember`] when the user is not a
    /// member of the task's project.
    pub async fn assign(
        &self,
        actor: Actor,
        id: TaskId,
        user_id: UserId,
    ) -> TaskBoardResult<TaskDetail> {
        let (mut task, project) = self.load_visible(actor, id).await?;
        ensure_assignable(&project, user_id)?;
        task.assign(user_id);
        self.tasks.update(&task).await?;
        self.resolve_detail(task).await
    }

    /// Clears a visible task's assignment, verifying the named user is the
    /// current assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AssigneeMismatch`] when the named user is
    /// not the current assignee.
    pub async fn unassign(
        &self,
        actor: Actor,
        id: TaskId,
        user_id: UserId,
    ) -> TaskBoardResult<TaskDetail> {
        let (mut task, _project) = self.load_visible(actor, id).await?;
        task.unassign(user_id)?;
        self.tasks.update(&task).await?;
        self.resolve_detail(task).await
    }

    /// Sets a visible task's workflow status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotVisible`] when the task is not visible
    /// to the requester.
    pub async fn set_status(
        &self,
        actor: Actor,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskBoardResult<TaskDetail> {
        let (mut task, _project) = self.load_visible(actor, id).await?;
        task.set_status(status);
        self.tasks.update(&task).await?;
        self.resolve_detail(task).await
    }

    /// Loads a task and its project, enforcing visibility scoping.
    async fn load_visible(&self, actor: Actor, id: TaskId) -> TaskBoardResult<(Task, Project)> {
        let task = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskBoardError::NotVisible(id))?;
        let project = self
            .projects
            .find_by_id(task.project_id())
            .await?
            .ok_or(TaskBoardError::NotVisible(id))?;
        if !actor.is_staff() && !project.is_member(actor.user_id()) {
            return Err(TaskBoardError::NotVisible(id));
        }
        Ok((task, project))
    }

    /// Returns the tasks of one project with resolved assignees, without
    /// visibility scoping. Callers must have established access.
    pub(crate) async fn tasks_for_project(
        &self,
        project_id: ProjectId,
    ) -> TaskBoardResult<Vec<TaskDetail>> {
        let filter = TaskFilter {
            project_ids: None,
            project: Some(project_id),
            status: None,
        };
        let tasks = self.tasks.list(&filter).await?;
        let mut details = Vec::with_capacity(tasks.len());
        for task in tasks {
            details.push(self.resolve_detail(task).await?);
        }
        Ok(details)
    }

    /// Deletes every task in a project. Used by project deletion.
    pub(crate) async fn delete_for_project(&self, project_id: ProjectId) -> TaskBoardResult<()> {
        Ok(self.tasks.delete_for_project(project_id).await?)
    }

    /// Clears one user's assignments within a project. Used by member
    /// removal.
    pub(crate) async fn clear_assignee_in_project(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> TaskBoardResult<()> {
        Ok(self
            .tasks
            .clear_assignee_in_project(project_id, user_id)
            .await?)
    }

    /// Resolves the assignee body for a task.
    pub(crate) async fn resolve_detail(&self, task: Task) -> TaskBoardResult<TaskDetail> {
        let assignee = match task.assignee() {
            Some(user_id) => self.users.find_by_id(user_id).await?,
            None => None,
        };
        Ok(TaskDetail { task, assignee })
    }
}

fn ensure_assignable(project: &Project, user_id: UserId) -> TaskBoardResult<()> {
    if !project.is_member(user_id) {
        return Err(TaskBoardError::AssigneeNotMember {
            user_id,
            project_id: project.id(),
        });
    }
    Ok(())
}
