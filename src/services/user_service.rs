//! User Service - delegation to the user repository
//!
//! Lookups of unknown ids surface as `DomainError::NotFound` carrying the id.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainError, NewUser, User, UserRepository, UserUpdate};
use crate::infrastructure::auth::hash_password;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<User, DomainError> {
        debug!(user_id = id, "Getting user by id");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Persist a user, replacing the plaintext password with its hash
    pub async fn insert(&self, mut user: NewUser) -> Result<User, DomainError> {
        user.password = hash_password(&user.password).map_err(DomainError::Internal)?;
        let created = self.repo.insert(user).await?;
        info!(user_id = created.id, "User created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, changes: UserUpdate) -> Result<User, DomainError> {
        let updated = self.repo.update(id, changes).await?;
        debug!(user_id = id, "User updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
