//! Validated email address type.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length in characters for an email address, matching the
/// `VARCHAR(254)` column.
const MAX_EMAIL_LENGTH: usize = 254;

/// Validated email address.
///
/// Validation is structural only: one `@` with non-empty local and domain
/// parts and no whitespace. Deliverability is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidEmail`] when the value does not
    /// contain exactly one `@` separating non-empty local and domain parts,
    /// or contains whitespace, and [`AccountDomainError::EmailTooLong`] when
    /// it exceeds 254 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AccountDomainError::EmailTooLong(raw));
        }

        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(AccountDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
