//! Error types for project domain validation.

use crate::account::domain::UserId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name exceeds the maximum persisted length.
    #[error("project name '{0}' exceeds 150 characters")]
    ProjectNameTooLong(String),

    /// The user is already a member of the project.
    #[error("user {0} is already a member of this project")]
    AlreadyMember(UserId),

    /// The user is not a member of the project.
    #[error("user {0} is not a member of this project")]
    NotAMember(UserId),
}
