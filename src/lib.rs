//! Contact Assistant - an in-memory contact book driven by a line-oriented command interpreter.
//!
//! Contacts carry a validated name, any number of ten-digit phone numbers, and an
//! optional birthday. The book answers "whose birthday is coming up" queries.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` keyed by contact name, with the birthday query
//! - **bot**: Command parsing, handlers, and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpcomingBirthday};
pub use bot::{AssistantBot, Clock, Command, FixedClock, Reply, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{AssistantError, AssistantResult, ConfigError};
pub use models::Record;
