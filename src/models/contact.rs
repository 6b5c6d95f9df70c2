//! Contact model representing one entry in the directory.

use crate::domain::{Age, ContactName, GmailAddress, MobileNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact record.
///
/// A Contact can only be built from validated value objects, so every
/// instance in the directory is known to be well-formed. Field validation
/// on deserialization rides on the value objects' serde impls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Full name; doubles as the directory key
    pub name: ContactName,

    /// Age in years
    pub age: Age,

    /// Gmail address
    pub email: GmailAddress,

    /// 10-digit mobile number
    pub mobile_no: MobileNumber,
}

impl Contact {
    /// Create a new contact from already-validated parts.
    pub fn new(name: ContactName, age: Age, email: GmailAddress, mobile_no: MobileNumber) -> Self {
        Self {
            name,
            age,
            email,
            mobile_no,
        }
    }
}

// The record formatter used everywhere a contact is shown to the user.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name   : {}", self.name)?;
        writeln!(f, "Age    : {}", self.age)?;
        writeln!(f, "Email  : {}", self.email)?;
        write!(f, "Mobile : {}", self.mobile_no)
    }
}
