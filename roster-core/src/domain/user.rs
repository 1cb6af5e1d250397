//! User domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
///
/// The id is assigned at construction and never changes. The email is only
/// mutated through [`User::change_email`]; validation happens in the service
/// layer before the mutation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
        }
    }

    /// Replace the email address in place
    pub fn change_email(&mut self, new_email: impl Into<String>) {
        self.email = new_email.into();
    }
}
