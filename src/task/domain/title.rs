//! Validated task title type.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length in characters for a task title, matching the
/// `VARCHAR(120)` column.
const MAX_TITLE_LENGTH: usize = 120;

/// Validated human-readable task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// The input is trimmed; interior whitespace and case are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] when the value is empty
    /// after trimming, or [`TaskDomainError::TaskTitleTooLong`] when it
    /// exceeds 120 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskTitle);
        }

        if normalized.chars().count() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TaskTitleTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the task title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
