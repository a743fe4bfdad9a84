//! Error types for the rolo address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validators raise typed errors, the record and book operations propagate them
//! unchanged, and the interactive shell is the only place that converts an error
//! into user-visible text.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A raw input failed value object validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced contact does not exist
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The referenced phone number does not exist on the contact
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur while handling a single shell command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A core operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// A raw input failed value object validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command was invoked with the wrong number of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found: John");

        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 1234567890");

        let err = CommandError::Usage("add <name> <phone>");
        assert_eq!(err.to_string(), "Usage: add <name> <phone>");
    }

    #[test]
    fn test_validation_error_passes_through_unchanged() {
        let err = BookError::from(ValidationError::InvalidPhone("12345".to_string()));
        assert_eq!(err.to_string(), "Phone number must be exactly 10 digits.");

        let err = CommandError::from(ValidationError::InvalidDateFormat("x".to_string()));
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY.");
    }
}
