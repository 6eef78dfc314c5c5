//! The address book: contacts keyed by name.

pub mod address_book;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
