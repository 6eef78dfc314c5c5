//! Birthday value object and next-occurrence arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Text format accepted and produced for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields, so the shape is checked first.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's birthday.
///
/// Constructed from `DD.MM.YYYY` text, which must name a real calendar
/// date. The decoded date is available through [`Birthday::date`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1995").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1995, 6, 15).unwrap());
/// assert!(Birthday::new("30.02.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has another
    /// shape or does not decode to a valid date.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();

        if !BIRTHDAY_PATTERN.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Wrap an already decoded date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The decoded calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day placed in `year`.
    ///
    /// February 29 falls on February 28 in years without a leap day.
    /// Returns `None` only when `year` is outside chrono's range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// The soonest occurrence on or after `today`.
    ///
    /// An occurrence equal to `today` is returned as is, not rolled over
    /// to the following year.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole days from `today` until the next occurrence (0 on the day itself).
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| next.signed_duration_since(today).num_days())
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as DD.MM.YYYY text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from text with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
