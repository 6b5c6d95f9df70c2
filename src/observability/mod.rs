//! Observability module.
//!
//! The directory never logs through process-wide state of its own; it
//! writes to an injected [`EventLog`] collaborator. The default
//! implementation forwards to the `tracing` subscriber set up in `main`.

pub mod event_log;

pub use event_log::{EventLog, NullLog, TracingLog};
