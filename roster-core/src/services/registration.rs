//! Registration service - user lifecycle orchestration

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{is_valid_email, User};
use crate::ports::{Notifier, UserRepository};

/// Registration service for the user lifecycle
///
/// A stateless coordinator over two injected collaborators. Each operation is
/// a short sequence of dependent awaits; the service holds no state between
/// calls and performs no recovery - the first error aborts the operation and
/// reaches the caller unchanged.
///
/// Log events carry user ids only, never email addresses.
pub struct RegistrationService {
    repository: Arc<dyn UserRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn UserRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Register a new user
    ///
    /// Validates the email shape, persists a freshly constructed user, then
    /// sends the welcome notice to the address the repository stored (which
    /// may be a normalized form of the input). A welcome failure does not
    /// undo the creation.
    pub async fn register(&self, email: &str) -> Result<User> {
        if !is_valid_email(email) {
            return Err(Error::invalid_input("email"));
        }

        let created = self.repository.add(&User::new(email)).await?;
        self.notifier.send_welcome(&created.email).await?;

        info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    /// Get a user by id, `None` if absent
    pub async fn get(&self, id: Uuid) -> Result<Option<User>> {
        self.repository.get_by_id(id).await
    }

    /// Change a user's email address
    ///
    /// The repository update always precedes the change notice; if the update
    /// fails the notice is never sent. The notice goes to the new address and
    /// references the old one.
    pub async fn change_email(&self, id: Uuid, new_email: &str) -> Result<()> {
        if !is_valid_email(new_email) {
            return Err(Error::invalid_input("new_email"));
        }

        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("User not found"))?;

        let old = user.email.clone();
        user.change_email(new_email);

        self.repository.update_email(id, new_email).await?;
        self.notifier.send_change_notice(new_email, &old).await?;

        debug!(user_id = %id, "email changed");
        Ok(())
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id).await?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}
