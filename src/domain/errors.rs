//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday text does not match `DD.MM.YYYY`.
    InvalidDateFormat(String),

    /// The birthday text is well-formed but names no real calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "Phone number must be exactly 10 digits."),
            Self::InvalidDateFormat(_) => write!(f, "Invalid date format. Use DD.MM.YYYY."),
            Self::InvalidDate(date) => write!(f, "Invalid date: {} does not exist", date),
        }
    }
}

impl std::error::Error for ValidationError {}
