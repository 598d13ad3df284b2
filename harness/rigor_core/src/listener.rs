//! Listener capability and the in-memory recording listener.
//!
//! Any reporting (console, file, structured log) is built by implementing
//! [`ResultsListener`] outside the core. [`RecordingListener`] keeps every
//! notification in memory and is what the harness's own tests assert against.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::Event;
use crate::location::Location;

/// Receives test lifecycle and check notifications.
///
/// Methods are called synchronously, in the order the engine receives them,
/// once each. Implementations must not report back into the engine that is
/// calling them.
pub trait ResultsListener: Send {
    fn running_test(&mut self, test: &str, location: Location);

    fn test_succeeded(&mut self, test: &str, location: Location);

    fn test_failed(&mut self, test: &str, location: Location);

    fn report_warning(&mut self, test: &str, location: Location, message: &str);

    fn assertion_failed(&mut self, test: &str, location: Location, message: &str);
}

/// Shared, append-only log of the events a [`RecordingListener`] received.
///
/// Cloning the handle shares the log, so the log stays readable after the
/// listener itself has been moved into an engine.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog::default()
    }

    fn push(&self, event: Event) {
        self.events.lock().push(event);
    }

    /// Snapshot of all events received so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Events belonging to one test, in delivery order.
    pub fn events_for(&self, test: &str) -> Vec<Event> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.test() == test)
            .cloned()
            .collect()
    }

    /// Messages of every `AssertionFailed` event for `test`.
    pub fn failures_for(&self, test: &str) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, Event::AssertionFailed { .. }) && e.test() == test)
            .filter_map(|e| e.message().map(str::to_owned))
            .collect()
    }

    /// `(test, succeeded)` for every terminal event, in delivery order.
    pub fn terminal_outcomes(&self) -> Vec<(String, bool)> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                Event::TestSucceeded { test, .. } => Some((test.clone(), true)),
                Event::TestFailed { test, .. } => Some((test.clone(), false)),
                _ => None,
            })
            .collect()
    }
}

/// Listener that appends every notification to an [`EventLog`].
pub struct RecordingListener {
    log: EventLog,
}

impl RecordingListener {
    /// Create a listener together with a handle to its log.
    pub fn new() -> (Box<Self>, EventLog) {
        let log = EventLog::new();
        (Box::new(RecordingListener { log: log.clone() }), log)
    }

    /// Create a listener appending to an existing log.
    pub fn with_log(log: EventLog) -> Box<Self> {
        Box::new(RecordingListener { log })
    }
}

impl ResultsListener for RecordingListener {
    fn running_test(&mut self, test: &str, location: Location) {
        self.log.push(Event::RunningTest {
            test: test.to_owned(),
            location,
        });
    }

    fn test_succeeded(&mut self, test: &str, location: Location) {
        self.log.push(Event::TestSucceeded {
            test: test.to_owned(),
            location,
        });
    }

    fn test_failed(&mut self, test: &str, location: Location) {
        self.log.push(Event::TestFailed {
            test: test.to_owned(),
            location,
        });
    }

    fn report_warning(&mut self, test: &str, location: Location, message: &str) {
        self.log.push(Event::ReportWarning {
            test: test.to_owned(),
            location,
            message: message.to_owned(),
        });
    }

    fn assertion_failed(&mut self, test: &str, location: Location, message: &str) {
        self.log.push(Event::AssertionFailed {
            test: test.to_owned(),
            location,
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests;
