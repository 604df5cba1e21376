//! Error types for task domain validation and parsing.

use crate::account::domain::UserId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task title exceeds the maximum persisted length.
    #[error("task title '{0}' exceeds 120 characters")]
    TaskTitleTooLong(String),

    /// An unassignment named a user other than the current assignee.
    #[error("user {0} is not the current assignee")]
    AssigneeMismatch(UserId),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
