//! MobileNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The fixed length of a stored mobile number.
const MOBILE_DIGITS: usize = 10;

/// A type-safe wrapper for mobile numbers.
///
/// This ensures that mobile numbers are validated at construction time.
/// A valid number is exactly 10 ASCII digits with no formatting characters.
///
/// # Example
///
/// ```
/// use contact_book::domain::MobileNumber;
///
/// let mobile = MobileNumber::new("9876543210").unwrap();
/// assert_eq!(mobile.as_str(), "9876543210");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Create a new MobileNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Every character must be an ASCII digit (checked first, so mixed
    ///   input like `"12345abcde"` reports the non-digit problem)
    /// - Must be exactly 10 digits long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MobileNotDigits` or
    /// `ValidationError::MobileWrongLength` depending on which rule failed.
    pub fn new(mobile: impl Into<String>) -> Result<Self, ValidationError> {
        let mobile = mobile.into();

        if !mobile.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::MobileNotDigits(mobile));
        }

        if mobile.len() != MOBILE_DIGITS {
            return Err(ValidationError::MobileWrongLength(mobile));
        }

        Ok(Self(mobile))
    }

    /// Get the mobile number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for MobileNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for MobileNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MobileNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
