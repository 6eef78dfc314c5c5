//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A contact's name.
///
/// Names are non-empty and made only of alphabetic characters, so a
/// single name is always one whitespace-free token on the command line.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// assert!(Name::new("John3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating its characters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty or
    /// contains anything other than alphabetic characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(char::is_alphabetic)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("John").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_rejects_digits_and_empty() {
        assert_eq!(
            Name::new("John3"),
            Err(ValidationError::InvalidName("John3".to_string()))
        );
        assert!(Name::new("").is_err());
        assert!(Name::new("John Doe").is_err());
        assert!(Name::new("O'Brien").is_err());
    }

    #[test]
    fn test_name_accepts_non_ascii_letters() {
        assert!(Name::new("Олена").is_ok());
        assert!(Name::new("José").is_ok());
    }

    #[test]
    fn test_name_from_str() {
        let name: Name = "Mary".parse().unwrap();
        assert_eq!(name.to_string(), "Mary");
    }

    #[test]
    fn test_name_serde() {
        let name = Name::new("Mary").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Mary\"");

        let parsed: Name = serde_json::from_str("\"Mary\"").unwrap();
        assert_eq!(parsed, name);

        let invalid: Result<Name, _> = serde_json::from_str("\"M4ry\"");
        assert!(invalid.is_err());
    }
}
