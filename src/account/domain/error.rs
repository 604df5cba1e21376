//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing domain account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username exceeds the maximum persisted length.
    #[error("username '{0}' exceeds 150 characters")]
    UsernameTooLong(String),

    /// The username contains characters outside the accepted set.
    #[error("invalid username '{0}', expected letters, digits, or @.+-_")]
    InvalidUsername(String),

    /// The email address is not structurally valid.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The email address exceeds the maximum persisted length.
    #[error("email address '{0}' exceeds 254 characters")]
    EmailTooLong(String),

    /// The supplied password is shorter than the minimum length.
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
}
