//! Roster Core - Business logic for user registration
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User) and validation
//! - **ports**: Trait definitions for external dependencies (UserRepository, Notifier)
//! - **services**: Business logic orchestration
//! - **adapters**: In-memory implementation for tests and onboarding
//!
//! The [`RegistrationService`] is the entry point. It is constructed with two
//! collaborators and holds no state of its own:
//!
//! ```
//! use std::sync::Arc;
//!
//! use roster_core::adapters::InMemoryUserRepository;
//! use roster_core::{Notifier, RegistrationService, Result};
//!
//! struct StdoutNotifier;
//!
//! #[async_trait::async_trait]
//! impl Notifier for StdoutNotifier {
//!     async fn send_welcome(&self, to: &str) -> Result<()> {
//!         println!("welcome {to}");
//!         Ok(())
//!     }
//!     async fn send_change_notice(&self, to: &str, old_email: &str) -> Result<()> {
//!         println!("notice {to} (was {old_email})");
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let service = RegistrationService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(StdoutNotifier),
//! );
//! let user = service.register("alice@example.com").await?;
//! assert_eq!(user.email, "alice@example.com");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{is_valid_email, User};
pub use ports::{Notifier, UserRepository};
pub use services::RegistrationService;
