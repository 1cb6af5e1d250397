//! User repository port - persistence abstraction

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::User;

/// User persistence abstraction
///
/// This trait defines the storage operations the service depends on.
/// Implementations (adapters) provide the actual persistence logic and are
/// expected to be atomic per call; no multi-call transactions are assumed.
/// Concurrent mutations of the same id have no defined ordering here - an
/// implementation that needs one must enforce it itself.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by id, `None` if absent
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Persist a new user
    ///
    /// Returns the stored user, which may differ from the input if the
    /// implementation normalizes fields (e.g. lowercases the email).
    async fn add(&self, user: &User) -> Result<User>;

    /// Update the email of an existing user
    async fn update_email(&self, id: Uuid, new_email: &str) -> Result<()>;

    /// Delete a user
    async fn delete(&self, id: Uuid) -> Result<()>;
}
