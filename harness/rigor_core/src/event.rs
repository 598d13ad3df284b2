//! Notifications delivered to a [`ResultsListener`].

use crate::listener::ResultsListener;
use crate::location::Location;

/// One listener notification, in value form.
///
/// The engine takes events as values so the forwarding contract is a single
/// typed call; [`Event::deliver`] maps each variant onto the matching listener
/// method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A test is about to run.
    RunningTest { test: String, location: Location },
    /// A test finished with no failed checks.
    TestSucceeded { test: String, location: Location },
    /// A test finished with at least one failed check.
    TestFailed { test: String, location: Location },
    /// A non-fatal observation. Never changes the test's outcome.
    ReportWarning {
        test: String,
        location: Location,
        message: String,
    },
    /// A check did not hold.
    AssertionFailed {
        test: String,
        location: Location,
        message: String,
    },
}

/// Discriminant of an [`Event`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    RunningTest,
    TestSucceeded,
    TestFailed,
    ReportWarning,
    AssertionFailed,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::RunningTest { .. } => EventKind::RunningTest,
            Event::TestSucceeded { .. } => EventKind::TestSucceeded,
            Event::TestFailed { .. } => EventKind::TestFailed,
            Event::ReportWarning { .. } => EventKind::ReportWarning,
            Event::AssertionFailed { .. } => EventKind::AssertionFailed,
        }
    }

    /// Name of the test this event belongs to.
    pub fn test(&self) -> &str {
        match self {
            Event::RunningTest { test, .. }
            | Event::TestSucceeded { test, .. }
            | Event::TestFailed { test, .. }
            | Event::ReportWarning { test, .. }
            | Event::AssertionFailed { test, .. } => test,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Event::RunningTest { location, .. }
            | Event::TestSucceeded { location, .. }
            | Event::TestFailed { location, .. }
            | Event::ReportWarning { location, .. }
            | Event::AssertionFailed { location, .. } => *location,
        }
    }

    /// Message carried by warnings and assertion failures.
    pub fn message(&self) -> Option<&str> {
        match self {
            Event::ReportWarning { message, .. } | Event::AssertionFailed { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Whether this event ends a test (`TestSucceeded` or `TestFailed`).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::TestSucceeded { .. } | Event::TestFailed { .. })
    }

    /// Call the listener method matching this event.
    pub fn deliver(&self, listener: &mut dyn ResultsListener) {
        match self {
            Event::RunningTest { test, location } => listener.running_test(test, *location),
            Event::TestSucceeded { test, location } => listener.test_succeeded(test, *location),
            Event::TestFailed { test, location } => listener.test_failed(test, *location),
            Event::ReportWarning {
                test,
                location,
                message,
            } => listener.report_warning(test, *location, message),
            Event::AssertionFailed {
                test,
                location,
                message,
            } => listener.assertion_failed(test, *location, message),
        }
    }
}
