//! In-memory user repository for testing and onboarding
//!
//! A HashMap behind a mutex, good enough to exercise the service without a
//! real store. Stores users verbatim (no normalization). Not a persistence
//! implementation - anything durable comes from an external adapter.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::UserRepository;

/// In-memory implementation of [`UserRepository`]
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn add(&self, user: &User) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update_email(&self, id: Uuid, new_email: &str) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(format!("User {} not found", id)))?;
        user.change_email(new_email);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        // Idempotent: deleting an absent id is still an ack
        self.users.lock().unwrap().remove(&id);
        Ok(())
    }
}
