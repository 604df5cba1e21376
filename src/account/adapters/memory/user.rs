//! In-memory repository for user accounts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    username_index: HashMap<String, UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        if state.username_index.contains_key(user.username().as_str()) {
            return Err(UserRepositoryError::DuplicateUsername(
                user.username().clone(),
            ));
        }

        state
            .username_index
            .insert(user.username().as_str().to_owned(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let user = state
            .username_index
            .get(username.as_str())
            .and_then(|user_id| state.users.get(user_id))
            .cloned();
        Ok(user)
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by_key(|user| (user.created_at(), user.id()));
        Ok(users)
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let user = state
            .users
            .remove(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        state.username_index.remove(user.username().as_str());
        Ok(())
    }
}
