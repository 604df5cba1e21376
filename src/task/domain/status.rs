//! Task status enumeration.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
///
/// Any status-to-status change is permitted; there is no transition state
/// machine. New tasks default to [`TaskStatus::Todo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Parses the exact wire representation.
    ///
    /// Clients must send `TODO`, `IN_PROGRESS`, or `DONE` verbatim; the
    /// tolerant [`TryFrom<&str>`] parse is reserved for storage strings.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] for anything but an exact match.
    pub fn from_wire(value: &str) -> Result<Self, ParseTaskStatusError> {
        match value {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Tolerant parse for storage strings: trims and ignores case.
impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
