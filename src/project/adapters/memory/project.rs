//! In-memory repository for projects.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn sorted_by_creation(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by_key(|project| (project.created_at(), project.id()));
    projects
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        state.insert(project.id(), project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::NotFound(project.id()));
        }
        state.insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.get(&id).cloned())
    }

    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(sorted_by_creation(state.values().cloned().collect()))
    }

    async fn list_for_member(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let projects = state
            .values()
            .filter(|project| project.is_member(user_id))
            .cloned()
            .collect();
        Ok(sorted_by_creation(projects))
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(ProjectRepositoryError::NotFound(id))
    }

    async fn remove_member_from_all(&self, user_id: UserId) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        for project in state.values_mut() {
            if project.is_member(user_id) {
                // Ignore the roster error: membership was just checked.
                let _removed = project.remove_member(user_id);
            }
        }
        Ok(())
    }
}
