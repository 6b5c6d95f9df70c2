use contact_book::observability::EventLog;
use std::sync::{Arc, Mutex};

/// Severity of a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Mock event log for testing.
///
/// Records every message together with its severity so tests can verify
/// how the directory routes events.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingLog {
    events: Arc<Mutex<Vec<(Severity, String)>>>,
}

#[allow(dead_code)]
impl RecordingLog {
    /// Create a new empty RecordingLog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().unwrap().clone()
    }

    /// Messages recorded at the given severity.
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<(Severity, String)> {
        self.events.lock().unwrap().last().cloned()
    }

    /// Discard all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, severity: Severity, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

impl EventLog for RecordingLog {
    fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }
}
