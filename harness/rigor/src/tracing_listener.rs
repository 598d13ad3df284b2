//! Listener that turns notifications into `tracing` events.

use rigor_core::{Location, ResultsListener};

/// Emits every notification as a structured `tracing` event.
///
/// Lifecycle notifications are `info`, warnings `warn`, failed checks
/// `error`. Every event carries `test` and `location` fields; for warnings and
/// failures the reported text is the event message.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingListener;

impl TracingListener {
    pub fn new() -> Self {
        TracingListener
    }
}

impl ResultsListener for TracingListener {
    fn running_test(&mut self, test: &str, location: Location) {
        tracing::info!(test, %location, "running test");
    }

    fn test_succeeded(&mut self, test: &str, location: Location) {
        tracing::info!(test, %location, "test succeeded");
    }

    fn test_failed(&mut self, test: &str, location: Location) {
        tracing::info!(test, %location, "test failed");
    }

    fn report_warning(&mut self, test: &str, location: Location, message: &str) {
        tracing::warn!(test, %location, "{message}");
    }

    fn assertion_failed(&mut self, test: &str, location: Location, message: &str) {
        tracing::error!(test, %location, "{message}");
    }
}
