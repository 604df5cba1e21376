//! Diesel row models for project persistence.

use super::schema::{project_members, projects};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for membership records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = project_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRow {
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Member user.
    pub user_id: uuid::Uuid,
    /// Roster position.
    pub position: i32,
}

/// Insert model for membership records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_members)]
pub struct NewMemberRow {
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Member user.
    pub user_id: uuid::Uuid,
    /// Roster position.
    pub position: i32,
}
