//! Project aggregate root.

use super::{ProjectDomainError, ProjectId, ProjectName};
use crate::account::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project aggregate root.
///
/// Holds the membership roster as an insertion-ordered list of user
/// identifiers. The first member is the creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Option<String>,
    members: Vec<UserId>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: ProjectName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted membership roster in insertion order.
    pub members: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with the creator as its first member.
    #[must_use]
    pub fn new(
        name: ProjectName,
        description: Option<String>,
        creator: UserId,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            id: ProjectId::new(),
            name,
            description,
            members: vec![creator],
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            members: data.members,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the membership roster in insertion order.
    #[must_use]
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the given user is a member of this project.
    #[must_use]
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.members.contains(&user_id)
    }

    /// Replaces the project name and description.
    pub fn update_details(&mut self, name: ProjectName, description: Option<String>) {
        self.name = name;
        self.description = description;
    }

    /// Adds a user to the membership roster.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::AlreadyMember`] when the user is
    /// already on the roster.
    pub fn add_member(&mut self, user_id: UserId) -> Result<(), ProjectDomainError> {
        if self.is_member(user_id) {
            return Err(ProjectDomainError::AlreadyMember(user_id));
        }
        self.members.push(user_id);
        Ok(())
    }

    /// Removes a user from the membership roster.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotAMember`] when the user is not on
    /// the roster.
    pub fn remove_member(&mut self, user_id: UserId) -> Result<(), ProjectDomainError> {
        if !self.is_member(user_id) {
            return Err(ProjectDomainError::NotAMember(user_id));
        }
        self.members.retain(|member| *member != user_id);
        Ok(())
    }
}
