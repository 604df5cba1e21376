//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::account::domain::UserId;
use crate::project::domain::ProjectId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<String>,
    assignee: Option<UserId>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted assignee, if any.
    pub assignee: Option<UserId>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<String>,
    /// Optional initial assignee.
    pub assignee: Option<UserId>,
    /// Initial workflow status.
    pub status: TaskStatus,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a new task in the given project.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &(impl Clock + ?Sized)) -> Self {
        Self {
            id: TaskId::new(),
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            status: data.status,
            due_date: data.due_date,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project's identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces title, description, status, and due date.
    ///
    /// Assignment changes go through [`Task::assign`] and [`Task::unassign`]
    /// instead.
    pub fn update_details(
        &mut self,
        title: TaskTitle,
        description: Option<String>,
        status: TaskStatus,
        due_date: Option<NaiveDate>,
    ) {
        self.title = title;
        self.description = description;
        self.status = status;
        self.due_date = due_date;
    }

    /// Assigns the task to the given user, replacing any current assignee.
    ///
    /// Membership of the owning project is validated by the service layer;
    /// the domain records the assignment only.
    pub const fn assign(&mut self, user_id: UserId) {
        self.assignee = Some(user_id);
    }

    /// Clears the assignment, verifying the caller named the current
    /// assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AssigneeMismatch`] when the given user is
    /// not the current assignee, including when the task is unassigned.
    pub fn unassign(&mut self, user_id: UserId) -> Result<(), TaskDomainError> {
        if self.assignee != Some(user_id) {
            return Err(TaskDomainError::AssigneeMismatch(user_id));
        }
        self.assignee = None;
        Ok(())
    }

    /// Clears the assignment unconditionally.
    ///
    /// Used by cascade paths (member removal, user deletion) where the
    /// caller has already established the assignee.
    pub const fn clear_assignee(&mut self) {
        self.assignee = None;
    }

    /// Sets the workflow status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
