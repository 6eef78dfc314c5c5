//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`AssistantError`] is exactly what the user sees.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command can end with.
///
/// All of them are recoverable: the bot prints the message and keeps
/// reading commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The contact has no phone with the given number
    #[error("Phone not found.")]
    PhoneNotFound,

    /// The contact is missing or has no birthday set
    #[error("No birthday found for this contact.")]
    BirthdayNotFound,

    /// The command line had too few arguments
    #[error("{usage}")]
    MissingArguments { usage: &'static str },

    /// An argument could not be interpreted
    #[error("{0}")]
    InvalidArgument(String),

    /// The command word is not recognized
    #[error("Invalid command.")]
    UnknownCommand(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
