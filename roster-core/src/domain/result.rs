//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Validation and lookup failures originate inside the service; the remaining
/// variants exist for collaborator implementations, which surface their
/// failures through this type so the service can pass them to the caller
/// unchanged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {field}")]
    InvalidInput { field: &'static str },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid-input error naming the offending field
    pub fn invalid_input(field: &'static str) -> Self {
        Self::InvalidInput { field }
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a repository error
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }

    /// Create a notification error
    pub fn notification(msg: impl Into<String>) -> Self {
        Self::Notification(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_names_field() {
        let err = Error::invalid_input("email");
        assert!(matches!(err, Error::InvalidInput { field: "email" }));
        assert_eq!(err.to_string(), "Invalid input: email");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("User not found");
        assert_eq!(err.to_string(), "Not found: User not found");
    }

    #[test]
    fn test_io_message_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "SMTP down");
        let err = Error::from(io);
        assert!(err.to_string().contains("SMTP down"));
    }
}
