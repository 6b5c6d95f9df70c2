//! Age value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for a contact's age.
///
/// The age arrives from the caller as a raw string, so construction parses
/// and validates it in one step. Only positive integers are accepted.
///
/// # Example
///
/// ```
/// use contact_book::domain::Age;
///
/// let age = Age::parse("30").unwrap();
/// assert_eq!(age.value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u32);

impl Age {
    /// Parse an Age from raw string input.
    ///
    /// # Validation Rules
    ///
    /// - Must parse as an integer (surrounding whitespace is ignored)
    /// - Must be positive (zero and negative values are rejected)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::AgeNotInteger` if the input does not
    /// represent a positive integer.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value: u32 = input
            .trim()
            .parse()
            .map_err(|_| ValidationError::AgeNotInteger(input.to_string()))?;

        if value == 0 {
            return Err(ValidationError::AgeNotInteger(input.to_string()));
        }

        Ok(Self(value))
    }

    /// Get the age as a number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

// Serde support - serialize as number
impl Serialize for Age {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from number with validation
impl<'de> Deserialize<'de> for Age {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        if value == 0 {
            return Err(serde::de::Error::custom(ValidationError::AgeNotInteger(
                value.to_string(),
            )));
        }
        Ok(Self(value))
    }
}

// Display support
impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
