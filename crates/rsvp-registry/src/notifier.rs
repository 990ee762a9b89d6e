//! The observability capability the registry reports to.
//!
//! [`Notifier`] is fire-and-forget: nothing the registry returns or stores
//! depends on what a notifier does with a message. The registry itself never
//! touches a logging backend directly; [`TracingNotifier`] is the bridge for
//! production use, and [`RecordingNotifier`] captures messages for tests.

use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Sink for informational and error events emitted by the registry.
///
/// Implementations must not fail; there is no return channel. The registry
/// calls [`notify_info`] after every successful upsert and bulk load, and
/// [`notify_error`] for every rejected participant or malformed snapshot.
///
/// [`notify_info`]: Notifier::notify_info
/// [`notify_error`]: Notifier::notify_error
pub trait Notifier {
    /// Report a successful operation.
    fn notify_info(&self, message: &str);

    /// Report a failure, optionally with its source error.
    fn notify_error(&self, message: &str, source: Option<&dyn std::error::Error>);
}

// ---------------------------------------------------------------------------
// Production implementation
// ---------------------------------------------------------------------------

/// Notifier that forwards events to the `tracing` subscriber.
///
/// The owning process decides where events land by installing a subscriber
/// (the demo runner uses a stdout fmt layer with severity tags).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_info(&self, message: &str) {
        tracing::info!(target: "rsvp_registry", "{message}");
    }

    fn notify_error(&self, message: &str, source: Option<&dyn std::error::Error>) {
        match source {
            Some(err) => tracing::error!(target: "rsvp_registry", error = %err, "{message}"),
            None => tracing::error!(target: "rsvp_registry", "{message}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Capturing implementation (tests)
// ---------------------------------------------------------------------------

/// Notifier that records every message in memory.
///
/// Messages are held behind a [`Mutex`] because the trait takes `&self`.
/// A poisoned lock (a panic while holding it) drops the message rather than
/// propagating the panic; the accessors then return what was captured before.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self {
            infos: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }

    /// All captured info messages, in arrival order.
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// All captured error messages, in arrival order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_info(&self, message: &str) {
        if let Ok(mut infos) = self.infos.lock() {
            infos.push(message.to_owned());
        }
    }

    fn notify_error(&self, message: &str, _source: Option<&dyn std::error::Error>) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(message.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_captures_in_order() {
        let recorder = RecordingNotifier::new();
        recorder.notify_info("first");
        recorder.notify_info("second");
        recorder.notify_error("boom", None);

        assert_eq!(recorder.infos(), vec!["first", "second"]);
        assert_eq!(recorder.errors(), vec!["boom"]);
    }

    #[test]
    fn recorder_starts_empty() {
        let recorder = RecordingNotifier::new();
        assert!(recorder.infos().is_empty());
        assert!(recorder.errors().is_empty());
    }
}
