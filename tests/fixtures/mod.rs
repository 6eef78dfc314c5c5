//! Test fixtures shared by the integration tests.
//!
//! Builders for records and books, plus a fixed "today" so birthday
//! arithmetic is deterministic.

use chrono::{Datelike, Duration, NaiveDate};
use contact_assistant::{
    AddressBook, AssistantBot, Birthday, Config, FixedClock, Name, Phone, Record,
};

/// The date every deterministic test runs on.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    date(2026, 10, 18)
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A birthday (in 1990) falling `offset` days after `from`, as DD.MM.YYYY text.
#[allow(dead_code)]
pub fn birthday_in(from: NaiveDate, offset: i64) -> String {
    let target = from + Duration::days(offset);
    format!("{:02}.{:02}.1990", target.day(), target.month())
}

/// A record with the given phones and optional birthday text.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(Name::new(name).unwrap());
    for phone in phones {
        record.add_phone(Phone::new(*phone).unwrap());
    }
    if let Some(text) = birthday {
        record.set_birthday(Birthday::new(text).unwrap());
    }
    record
}

/// A book holding the given records in order.
#[allow(dead_code)]
pub fn sample_book(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}

/// A bot with default settings pinned to [`today`].
#[allow(dead_code)]
pub fn sample_bot() -> AssistantBot {
    AssistantBot::with_clock(Config::default(), FixedClock(today()))
}
