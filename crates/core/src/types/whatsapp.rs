//! WhatsApp number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`WhatsAppNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum WhatsAppNumberError {
    /// The input string is empty.
    #[error("WhatsApp number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("WhatsApp number must be at most {max} digits")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that is not an ASCII digit.
    #[error("WhatsApp number must contain only digits (found '{found}')")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// A WhatsApp number in international format, digits only.
///
/// Used to build `wa.me` click-to-chat links, which accept the full number
/// with country code and no `+`, spaces, or punctuation.
///
/// ## Constraints
///
/// - Length: 1-15 digits (E.164 limit)
/// - ASCII digits only
///
/// ## Examples
///
/// ```
/// use granja_core::WhatsAppNumber;
///
/// // Valid numbers
/// assert!(WhatsAppNumber::parse("5511987654321").is_ok());
///
/// // Invalid numbers
/// assert!(WhatsAppNumber::parse("").is_err());              // empty
/// assert!(WhatsAppNumber::parse("+55 11 98765-4321").is_err()); // formatting
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WhatsAppNumber(String);

impl WhatsAppNumber {
    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `WhatsAppNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 15 characters, or
    /// contains anything other than ASCII digits.
    pub fn parse(s: &str) -> Result<Self, WhatsAppNumberError> {
        if s.is_empty() {
            return Err(WhatsAppNumberError::Empty);
        }

        if s.len() > Self::MAX_DIGITS {
            return Err(WhatsAppNumberError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        if let Some(found) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(WhatsAppNumberError::InvalidCharacter { found });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `WhatsAppNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WhatsAppNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
