//! Keyed, insertion-ordered collection of contact records.

use crate::domain::Name;
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

/// Window used by the birthday reminder when none is given.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside a reminder window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    /// Date of the next occurrence.
    pub date: NaiveDate,
    /// Days from the query date until `date`.
    pub days_until: i64,
}

/// The address book owning every contact record.
///
/// Records are keyed by their name text. Iteration follows insertion
/// order; replacing a record keeps the original slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    ///
    /// No merging happens: the previous record's phones and birthday are
    /// dropped. Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "Storing record");
        let replaced = self.records.insert(key, record);
        if replaced.is_some() {
            debug!("Replaced existing record");
        }
        replaced
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// Later records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name)?;
        debug!(name = %name, "Deleted record");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Names of contacts whose next birthday is fewer than `within_days`
    /// days after `today`.
    ///
    /// A birthday on `today` counts (0 days). Order follows the book.
    pub fn upcoming_birthdays(&self, within_days: u32, today: NaiveDate) -> Vec<String> {
        self.upcoming_birthdays_detailed(within_days, today)
            .into_iter()
            .map(|upcoming| upcoming.name.into_inner())
            .collect()
    }

    /// Like [`upcoming_birthdays`](Self::upcoming_birthdays), with the
    /// occurrence date and day count for each contact.
    pub fn upcoming_birthdays_detailed(
        &self,
        within_days: u32,
        today: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(within_days);
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let date = record.birthday()?.next_occurrence(today)?;
                let days_until = date.signed_duration_since(today).num_days();
                (0..window).contains(&days_until).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    date,
                    days_until,
                })
            })
            .collect();

        debug!(
            within_days,
            %today,
            matches = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
