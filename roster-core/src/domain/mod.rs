//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

pub mod email;
pub mod result;
mod user;

pub use email::is_valid_email;
pub use user::User;
