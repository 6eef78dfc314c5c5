//! Data models for the contact book.
//!
//! A [`Record`] is one contact: its validated name, its phone numbers,
//! and an optional birthday.

pub mod record;

pub use record::Record;
