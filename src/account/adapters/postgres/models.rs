//! Diesel row models for user account persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Unique login name.
    pub username: String,
    /// Optional email address.
    pub email: Option<String>,
    /// Password hash in PHC string format.
    pub password_hash: String,
    /// Staff privilege flag.
    pub is_staff: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Unique login name.
    pub username: String,
    /// Optional email address.
    pub email: Option<String>,
    /// Password hash in PHC string format.
    pub password_hash: String,
    /// Staff privilege flag.
    pub is_staff: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
