//! rolo - a command-line address book with birthday reminders.
//!
//! This library holds the whole data model and all command logic; the binary
//! is a thin interactive shell over it. Contacts live in memory for the
//! lifetime of one session: there is no persistence, no concurrency, and no
//! network.
//!
//! # Architecture
//!
//! - **domain**: value objects (name, phone, birthday) validated at construction
//! - **models**: the `Contact` record and its mutation operations
//! - **book**: the `AddressBook` collection and the upcoming-birthday computation
//! - **commands**: one handler per shell command, returning typed results
//! - **shell**: the read-eval-print loop that renders results and errors
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use book::{AddressBook, BirthdayReminder, BookUpdate};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Contact;
