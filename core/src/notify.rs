//! Collaborator sinks: the user-facing message log and the developer-facing
//! diagnostic channel.
//!
//! # Design
//! `HeroClient` writes two kinds of output and owns neither destination.
//! Human-readable status lines go to a [`Notifier`]; raw error values go to
//! a [`DiagnosticSink`]. Both are fire-and-forget and must tolerate
//! interleaved writes from concurrent operations.

use std::sync::{Mutex, PoisonError};

use crate::error::ApiError;

/// Append-only sink for human-readable status lines.
///
/// Consumed by a UI surface; nothing in this crate reads it back except
/// tests. Ordering of lines from concurrent operations is unspecified.
pub trait Notifier: Send + Sync {
    fn append(&self, message: &str);
}

/// Developer-facing capture of failed round-trips. Never shown to end
/// users; the user-visible record of a failure is the Notifier line.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, error: &ApiError);
}

/// In-memory append-only message log.
///
/// The default [`Notifier`] implementation: a mutex-guarded buffer a UI can
/// drain or display. Writes from concurrent operations interleave in
/// whatever order the scheduler produces.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines appended so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned log still holds valid lines; keep appending.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for MessageLog {
    fn append(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

/// Default diagnostic sink: forwards errors to the `tracing` error stream.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, error: &ApiError) {
        tracing::error!(%error, "hero API request failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_log_appends_in_order() {
        let log = MessageLog::new();
        log.append("first");
        log.append("second");
        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn message_log_clear_empties_buffer() {
        let log = MessageLog::new();
        log.append("line");
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn message_log_is_shareable_across_threads() {
        let log = std::sync::Arc::new(MessageLog::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let log = log.clone();
                std::thread::spawn(move || log.append(&format!("line {i}")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.messages().len(), 4);
    }
}
