//! Validated username type.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a username, matching the `VARCHAR(150)` column.
const MAX_USERNAME_LENGTH: usize = 150;

/// Validated unique login name for a user account.
///
/// Usernames are trimmed and accept ASCII letters, digits, and the
/// characters `@ . + - _` (e.g. `ada.lovelace`, `ops-bot@internal`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyUsername`] when the value is
    /// empty after trimming, [`AccountDomainError::UsernameTooLong`] when it
    /// exceeds 150 characters, or [`AccountDomainError::InvalidUsername`]
    /// when it contains characters outside the accepted set.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(AccountDomainError::EmptyUsername);
        }

        if normalized.len() > MAX_USERNAME_LENGTH {
            return Err(AccountDomainError::UsernameTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));

        if !is_valid {
            return Err(AccountDomainError::InvalidUsername(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
