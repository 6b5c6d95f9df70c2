//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided age is not a positive integer.
    AgeNotInteger(String),

    /// The provided email is not a valid Gmail address.
    InvalidEmail(String),

    /// The provided mobile number contains non-digit characters.
    MobileNotDigits(String),

    /// The provided mobile number is not exactly 10 digits long.
    MobileWrongLength(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::AgeNotInteger(age) => write!(f, "Age must be a positive integer: {}", age),
            Self::InvalidEmail(email) => write!(f, "Email must be a valid Gmail address: {}", email),
            Self::MobileNotDigits(mobile) => {
                write!(f, "Mobile number must contain only digits: {}", mobile)
            }
            Self::MobileWrongLength(mobile) => {
                write!(f, "Mobile number must be exactly 10 digits: {}", mobile)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
