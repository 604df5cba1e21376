//! Service layer for registration, credential checks, and administration.

use crate::account::{
    domain::{AccountDomainError, Actor, EmailAddress, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError},
};
use crate::auth::password::{self, PasswordError};
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Minimum accepted password length for self-registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    password: String,
    email: Option<String>,
}

impl RegisterUserRequest {
    /// Creates a request with required registration fields.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: None,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Password hashing or hash parsing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),
    /// User repository operation failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Project repository operation failed during cascade cleanup.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// Task repository operation failed during cascade cleanup.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// The username/password pair did not match a known account.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The operation requires staff privileges.
    #[error("staff privileges required")]
    StaffOnly,
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory orchestration service.
///
/// Deleting a user cascades across aggregates: their project memberships
/// are removed and their task assignments cleared, mirroring the database
/// foreign-key behaviour for the in-memory adapters.
#[derive(Clone)]
pub struct UserDirectoryService {
    users: Arc<dyn UserRepository>,
    projects: Arc<dyn ProjectRepository>,
    tasks: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl UserDirectoryService {
    /// Creates a new user directory service.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        projects: Arc<dyn ProjectRepository>,
        tasks: Arc<dyn TaskRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            users,
            projects,
            tasks,
            clock,
        }
    }

    /// Registers a new non-staff user. Open to anonymous callers.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError`] when validation fails, the password
    /// is too short, the username is taken, or persistence fails.
    pub async fn register(&self, request: RegisterUserRequest) -> UserDirectoryResult<User> {
        let username = Username::new(request.username)?;
        let email = request.email.map(EmailAddress::new).transpose()?;

        if request.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AccountDomainError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }
        let password_hash = password::hash(&request.password)?;

        let user = User::new(username, email, password_hash, &*self.clock);
        self.users.store(&user).await?;
        Ok(user)
    }

    /// Verifies a username/password pair and returns the matching user.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::InvalidCredentials`] when the pair
    /// does not match a known account.
    pub async fn authenticate(
        &self,
        username: &str,
        password_input: &str,
    ) -> UserDirectoryResult<User> {
        let Ok(username) = Username::new(username) else {
            password::verify_dummy(password_input);
            return Err(UserDirectoryError::InvalidCredentials);
        };
        let Some(user) = self.users.find_by_username(&username).await? else {
            // Burn the same hashing work so unknown usernames cannot be
            // told apart from wrong passwords by response timing.
            password::verify_dummy(password_input);
            return Err(UserDirectoryError::InvalidCredentials);
        };
        if !password::verify(password_input, user.password_hash())? {
            return Err(UserDirectoryError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Finds a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Users`] when the lookup fails.
    pub async fn lookup(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// Returns all users. Staff only.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::StaffOnly`] for non-staff actors.
    pub async fn list(&self, actor: Actor) -> UserDirectoryResult<Vec<User>> {
        if !actor.is_staff() {
            return Err(UserDirectoryError::StaffOnly);
        }
        Ok(self.users.list().await?)
    }

    /// Deletes a user and cleans up their memberships and assignments.
    /// Staff only.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::StaffOnly`] for non-staff actors, or
    /// [`UserRepositoryError::NotFound`] when the user does not exist.
    pub async fn delete(&self, actor: Actor, id: UserId) -> UserDirectoryResult<()> {
        if !actor.is_staff() {
            return Err(UserDirectoryError::StaffOnly);
        }
        // Fail before any cleanup when the target does not exist.
        if self.users.find_by_id(id).await?.is_none() {
            return Err(UserRepositoryError::NotFound(id).into());
        }

        self.tasks.clear_assignee(id).await?;
        self.projects.remove_member_from_all(id).await?;
        self.users.delete(id).await?;
        Ok(())
    }
}
