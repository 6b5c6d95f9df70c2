//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the contact directory.
///
/// All variants are recoverable at the call site: the operation fails,
/// the directory state is untouched, and the caller reports the message
/// and continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A contact with this name is already stored
    #[error("Contact '{0}' already exists")]
    AlreadyExists(String),

    /// No contact with this name is stored
    #[error("Contact '{0}' not found")]
    NotFound(String),

    /// A field failed validation; nothing was created or changed
    #[error("Invalid contact data: {0}")]
    InvalidData(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
