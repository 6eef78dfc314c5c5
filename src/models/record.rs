//! Record model representing one contact.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{AssistantError, AssistantResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contact in the address book.
///
/// The name is fixed at creation and is the contact's identity. Phones
/// keep insertion order and may repeat; the birthday is replaced as a
/// whole when set again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &Phone) -> AssistantResult<Phone> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::PhoneNotFound` if the record has no phone `old`.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> AssistantResult<()> {
        let index = self.position_of(old)?;
        self.phones[index] = new;
        Ok(())
    }

    fn position_of(&self, phone: &Phone) -> AssistantResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or(AssistantError::PhoneNotFound)
    }

    /// Set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` until this contact's next birthday.
    ///
    /// `None` when no birthday is set. A birthday falling on `today` gives 0.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// Phones joined for display, e.g. `1234567890, 0987654321`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
