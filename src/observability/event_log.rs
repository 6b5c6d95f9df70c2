//! Event log collaborator injected into the contact directory.

/// Severity-tagged log sink for directory operations.
///
/// Implementations decide where the messages go; the directory only
/// decides severity: info for successful mutations and benign lookup
/// misses, warn for duplicate keys and mutations against absent names,
/// error for malformed field input.
pub trait EventLog: Send + Sync {
    /// Record a routine event.
    fn info(&self, message: &str);

    /// Record a suspicious but handled condition.
    fn warn(&self, message: &str);

    /// Record rejected input.
    fn error(&self, message: &str);
}

/// EventLog implementation that forwards to the `tracing` macros.
///
/// Log destination and formatting are whatever the process-wide
/// subscriber was configured with (stderr or a log file).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl EventLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// EventLog implementation that discards everything.
///
/// Useful for tests and for embedding the directory where no log sink
/// is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl EventLog for NullLog {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
