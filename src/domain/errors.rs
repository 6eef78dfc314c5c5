//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant keeps the rejected input for logging; the `Display`
/// text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or contains non-alphabetic characters.
    InvalidName(String),

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in DD.MM.YYYY form.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn rejected_value(&self) -> &str {
        match self {
            Self::InvalidName(value) | Self::InvalidPhone(value) | Self::InvalidBirthday(value) => {
                value
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(_) => write!(f, "Name must contain only alphabetic characters."),
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits long."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidName("John3".into()).to_string(),
            "Name must contain only alphabetic characters."
        );
        assert_eq!(
            ValidationError::InvalidPhone("123".into()).to_string(),
            "Phone number must be 10 digits long."
        );
        assert_eq!(
            ValidationError::InvalidBirthday("1990-01-01".into()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
    }

    #[test]
    fn test_rejected_value() {
        let err = ValidationError::InvalidPhone("12345".into());
        assert_eq!(err.rejected_value(), "12345");
    }
}
