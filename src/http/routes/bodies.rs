//! Response body types shared across handler modules.

use crate::account::domain::User;
use crate::project::services::ProjectDetail;
use crate::task::domain::TaskStatus;
use crate::task::services::TaskDetail;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user as rendered in API responses. Never carries credentials.
#[derive(Debug, Clone, Serialize)]
pub(super) struct UserBody {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
}

impl From<&User> for UserBody {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().into_inner(),
            username: user.username().as_str().to_owned(),
            email: user.email().map(|email| email.as_str().to_owned()),
        }
    }
}

/// A task with its assignee resolved to a nested user body.
#[derive(Debug, Clone, Serialize)]
pub(super) struct TaskBody {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assigned_to: Option<UserBody>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<&TaskDetail> for TaskBody {
    fn from(detail: &TaskDetail) -> Self {
        Self {
            id: detail.task.id().into_inner(),
            project_id: detail.task.project_id().into_inner(),
            title: detail.task.title().as_str().to_owned(),
            description: detail.task.description().map(str::to_owned),
            status: detail.task.status(),
            assigned_to: detail.assignee.as_ref().map(UserBody::from),
            due_date: detail.task.due_date(),
            created_at: detail.task.created_at(),
        }
    }
}

/// A project with nested member and task bodies.
#[derive(Debug, Clone, Serialize)]
pub(super) struct ProjectBody {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<UserBody>,
    pub tasks: Vec<TaskBody>,
    pub created_at: DateTime<Utc>,
}

impl From<&ProjectDetail> for ProjectBody {
    fn from(detail: &ProjectDetail) -> Self {
        Self {
            id: detail.project.id().into_inner(),
            name: detail.project.name().as_str().to_owned(),
            description: detail.project.description().map(str::to_owned),
            members: detail.members.iter().map(UserBody::from).collect(),
            tasks: detail.tasks.iter().map(TaskBody::from).collect(),
            created_at: detail.project.created_at(),
        }
    }
}
