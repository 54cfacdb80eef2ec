//! Notification sink collaborator.
//!
//! The core never renders anything itself; user-facing messages (document
//! classification, "nothing importable", read errors, slot rejections) go
//! through this seam and the hosting application decides how to display
//! them. Core logic never blocks on the outcome of a notification.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Message severity, mirroring the frontend toast levels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing message consumer.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink that forwards notifications to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info | Severity::Success => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Error => log::error!("{}", message),
        }
    }
}

/// Sink that records notifications in memory; used by tests and by callers
/// that batch messages into an HTTP response.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages recorded so far.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().clone()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages.lock().push((severity, message.to_string()));
    }
}
