//! Per-invocation reporting handle.

use std::cell::Cell;
use std::sync::Arc;

use crate::check::Verdict;
use crate::engine::TestEngine;
use crate::event::Event;
use crate::location::Location;

/// Binds one test name and location to the engine its checks report into.
///
/// A context lives for exactly one test execution. Apart from its counters it
/// is read-only; the counters are what [`ScopedTest`](crate::ScopedTest)
/// consults to pick the test's terminal event.
#[derive(Debug)]
pub struct TestContext {
    engine: Arc<TestEngine>,
    test_name: String,
    location: Location,
    passed: Cell<usize>,
    failed: Cell<usize>,
    warnings: Cell<usize>,
}

impl TestContext {
    pub fn new(engine: Arc<TestEngine>, test_name: impl Into<String>, location: Location) -> Self {
        TestContext {
            engine,
            test_name: test_name.into(),
            location,
            passed: Cell::new(0),
            failed: Cell::new(0),
            warnings: Cell::new(0),
        }
    }

    #[inline]
    pub fn engine(&self) -> &Arc<TestEngine> {
        &self.engine
    }

    #[inline]
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Where the test itself was declared.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Report a failed check at `location`.
    pub fn assertion_failed(&self, location: Location, message: impl Into<String>) {
        self.failed.set(self.failed.get() + 1);
        self.engine.notify(&Event::AssertionFailed {
            test: self.test_name.clone(),
            location,
            message: message.into(),
        });
    }

    /// Report a non-fatal observation at `location`.
    pub fn report_warning(&self, location: Location, message: impl Into<String>) {
        self.warnings.set(self.warnings.get() + 1);
        self.engine.notify(&Event::ReportWarning {
            test: self.test_name.clone(),
            location,
            message: message.into(),
        });
    }

    /// Record a check that held. Successes are counted, never reported.
    pub fn report_success(&self) {
        self.passed.set(self.passed.get() + 1);
    }

    /// Apply a check's verdict: count a pass, or report the failure.
    pub fn record(&self, location: Location, verdict: Verdict) {
        match verdict {
            Verdict::Pass => self.report_success(),
            Verdict::Fail(message) => self.assertion_failed(location, message),
        }
    }

    pub fn passed_checks(&self) -> usize {
        self.passed.get()
    }

    pub fn failed_checks(&self) -> usize {
        self.failed.get()
    }

    pub fn warnings(&self) -> usize {
        self.warnings.get()
    }

    /// Whether any failure was reported through this context.
    pub fn has_failed(&self) -> bool {
        self.failed.get() > 0
    }

    pub(crate) fn notify_lifecycle(&self, event: fn(String, Location) -> Event) {
        self.engine.notify(&event(self.test_name.clone(), self.location));
    }
}
