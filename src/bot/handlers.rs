//! Command handlers.
//!
//! Each handler turns the arguments of one command into calls on the
//! [`AddressBook`] and returns the text to show. Failures come back as
//! [`AssistantError`]; the bot renders them, handlers never print.

use crate::book::AddressBook;
use crate::config::MAX_BIRTHDAY_WINDOW_DAYS;
use crate::domain::{Birthday, Name, Phone};
use crate::error::{AssistantError, AssistantResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

const ADD_USAGE: &str = "Command 'add' requires both name and phone number.";
const CHANGE_USAGE: &str = "Command 'change' requires name, old phone and new phone.";
const PHONE_USAGE: &str = "Command 'phone' requires a name.";
const ADD_BIRTHDAY_USAGE: &str = "Command 'add-birthday' requires name and date (DD.MM.YYYY).";
const SHOW_BIRTHDAY_USAGE: &str = "Command 'show-birthday' requires a name.";

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create the contact if needed and attach the phone.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> AssistantResult<String> {
    let [name, phone, ..] = args else {
        return Err(AssistantError::MissingArguments { usage: ADD_USAGE });
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(Phone::new(*phone)?);
        debug!(name = %name, "Phone appended to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(Name::new(*name)?);
    record.add_phone(Phone::new(*phone)?);
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`: replace a phone in place.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> AssistantResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(AssistantError::MissingArguments {
            usage: CHANGE_USAGE,
        });
    };

    let record = book
        .find_mut(name)
        .ok_or(AssistantError::ContactNotFound)?;
    // A malformed number can never be on the record.
    let old_phone = Phone::new(*old_phone).map_err(|_| AssistantError::PhoneNotFound)?;
    let new_phone = Phone::new(*new_phone)?;
    record.edit_phone(&old_phone, new_phone)?;
    Ok("Phone updated.".to_string())
}

/// `phone <name>`: list a contact's phones.
pub fn show_phone(args: &[&str], book: &AddressBook) -> AssistantResult<String> {
    let [name, ..] = args else {
        return Err(AssistantError::MissingArguments { usage: PHONE_USAGE });
    };

    let record = book.find(name).ok_or(AssistantError::ContactNotFound)?;
    Ok(format!("{}'s phones: {}", name, record.phones_display()))
}

/// `all`: one line per contact with its phones.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    book.iter()
        .map(|record| format!("{}: {}", record.name(), record.phones_display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> AssistantResult<String> {
    let [name, birthday, ..] = args else {
        return Err(AssistantError::MissingArguments {
            usage: ADD_BIRTHDAY_USAGE,
        });
    };

    let record = book
        .find_mut(name)
        .ok_or(AssistantError::ContactNotFound)?;
    record.set_birthday(Birthday::new(birthday)?);
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`: print the birthday as DD.MM.YYYY.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> AssistantResult<String> {
    let [name, ..] = args else {
        return Err(AssistantError::MissingArguments {
            usage: SHOW_BIRTHDAY_USAGE,
        });
    };

    let birthday = book
        .find(name)
        .and_then(Record::birthday)
        .ok_or(AssistantError::BirthdayNotFound)?;
    Ok(format!("{}'s birthday is {}", name, birthday))
}

/// `birthdays [days]`: names with a birthday in the next `days` days
/// (`default_window` when omitted), one per line.
pub fn birthdays(
    args: &[&str],
    book: &AddressBook,
    default_window: u32,
    today: NaiveDate,
) -> AssistantResult<String> {
    let window = match args.first() {
        Some(raw) => parse_window(raw)?,
        None => default_window,
    };

    let upcoming = book.upcoming_birthdays(window, today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming.join("\n"))
}

fn parse_window(raw: &str) -> AssistantResult<u32> {
    raw.parse::<u32>()
        .ok()
        .filter(|days| (1..=MAX_BIRTHDAY_WINDOW_DAYS).contains(days))
        .ok_or_else(|| {
            AssistantError::InvalidArgument(format!(
                "Days must be a number between 1 and {}.",
                MAX_BIRTHDAY_WINDOW_DAYS
            ))
        })
}
