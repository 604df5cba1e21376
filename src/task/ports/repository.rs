//! Repository port for task persistence, lookup, and assignment cleanup.

use crate::account::domain::UserId;
use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Criteria for listing tasks.
///
/// `project_ids` scopes the result to the given projects; `None` means
/// unrestricted (used for staff visibility). The other fields are optional
/// refinements combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Restrict to tasks in these projects; `None` means all projects.
    pub project_ids: Option<Vec<ProjectId>>,
    /// Restrict to a single project.
    pub project: Option<ProjectId>,
    /// Restrict to tasks with this status.
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Returns whether the given task matches this filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(scope) = &self.project_ids
            && !scope.contains(&task.project_id())
        {
            return false;
        }
        if let Some(project) = self.project
            && task.project_id() != project
        {
            return false;
        }
        if let Some(status) = self.status
            && task.status() != status
        {
            return false;
        }
        true
    }
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns tasks matching the filter, ordered by creation time.
    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Deletes every task belonging to the given project.
    ///
    /// Used when a project is deleted.
    async fn delete_for_project(&self, project_id: ProjectId) -> TaskRepositoryResult<()>;

    /// Clears the given user's assignment on every task.
    ///
    /// Used when a user account is deleted; the tasks themselves survive.
    async fn clear_assignee(&self, user_id: UserId) -> TaskRepositoryResult<()>;

    /// Clears the given user's assignment on tasks within one project.
    ///
    /// Used when a member is removed from a project.
    async fn clear_assignee_in_project(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
