//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input has too few digits.
    #[error("phone number must have at least {min} digits (got {got})")]
    TooShort {
        /// Minimum digit count.
        min: usize,
        /// Digits found in the input.
        got: usize,
    },
    /// The input has too many digits.
    #[error("phone number must have at most {max} digits (got {got})")]
    TooLong {
        /// Maximum digit count.
        max: usize,
        /// Digits found in the input.
        got: usize,
    },
}

/// A loosely validated phone number.
///
/// Formatting characters (spaces, parentheses, dashes, a leading `+`) are
/// allowed; validation only requires 10-15 digits once everything that is not
/// a digit has been stripped. The original formatting is preserved.
///
/// ## Examples
///
/// ```
/// use rolodex_core::Phone;
///
/// assert!(Phone::parse("(555) 123-4567").is_ok());
/// assert!(Phone::parse("+44 20 7946 0958").is_ok());
/// assert!(Phone::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 10;
    /// Maximum number of digits.
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or its digit count after
    /// stripping non-digits is outside 10-15.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.trim().is_empty() {
            return Err(PhoneError::Empty);
        }

        let digits = s.chars().filter(char::is_ascii_digit).count();
        if digits < Self::MIN_DIGITS {
            return Err(PhoneError::TooShort {
                min: Self::MIN_DIGITS,
                got: digits,
            });
        }
        if digits > Self::MAX_DIGITS {
            return Err(PhoneError::TooLong {
                max: Self::MAX_DIGITS,
                got: digits,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns only the digits of the phone number.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formatted_number() {
        let phone = Phone::parse("(555) 123-4567").unwrap();
        assert_eq!(phone.digits(), "5551234567");
        assert_eq!(phone.as_str(), "(555) 123-4567");
    }

    #[test]
    fn test_parse_international() {
        assert!(Phone::parse("+44 20 7946 0958").is_ok());
    }

    #[test]
    fn test_parse_no_digits() {
        assert!(matches!(
            Phone::parse("abc"),
            Err(PhoneError::TooShort { got: 0, .. })
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Phone::parse("  "), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            Phone::parse("123-456"),
            Err(PhoneError::TooShort { got: 6, .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            Phone::parse("1234567890123456"),
            Err(PhoneError::TooLong { got: 16, .. })
        ));
    }
}
