//! Contact Book - a menu-driven contact manager with a validated in-memory directory.
//!
//! The core is the [`ContactDirectory`]: a single-threaded, in-memory mapping
//! from unique contact name to record. Every create/update validates all
//! fields before touching state, so a failed operation never leaves a partial
//! record behind. Records live only for the process lifetime.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, age, Gmail address, mobile number)
//! - **models**: The Contact record built from those value objects
//! - **directory**: The in-memory directory with create/view/update/delete/search/count
//! - **error**: Custom error types for precise error handling
//! - **observability**: The event log collaborator injected into the directory
//! - **config**: Configuration management from environment variables
//! - **menu**: The interactive integer-choice front-end

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;
pub mod observability;

pub use config::Config;
pub use directory::ContactDirectory;
pub use domain::{Age, ContactName, GmailAddress, MobileNumber, ValidationError};
pub use error::{ConfigError, ConfigResult, DirectoryError, DirectoryResult};
pub use menu::Menu;
pub use models::Contact;
pub use observability::{EventLog, NullLog, TracingLog};
