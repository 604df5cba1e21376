//! Repository port for user persistence and lookup.

use crate::account::domain::{User, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the user ID
    /// already exists or [`UserRepositoryError::DuplicateUsername`] when the
    /// username is already taken.
    async fn store(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds a user by username.
    ///
    /// Returns `None` when no user has the given username.
    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>>;

    /// Returns all users ordered by creation time.
    async fn list(&self) -> UserRepositoryResult<Vec<User>>;

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not
    /// exist.
    async fn delete(&self, id: UserId) -> UserRepositoryResult<()>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// A user with the same username already exists.
    #[error("username already taken: {0}")]
    DuplicateUsername(Username),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
