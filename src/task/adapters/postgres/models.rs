//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee_id: Option<uuid::Uuid>,
    /// Workflow status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee_id: Option<uuid::Uuid>,
    /// Workflow status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
