//! Test registration and bulk execution.
//!
//! A [`TestsRegistry`] owns the named tests and the single [`TestEngine`] their
//! contexts report into. Registration is an explicit pass (typically the
//! `register` function generated by `#[suite]`) that completes before
//! [`TestsRegistry::run_all`] is called.
//!
//! Tests run in registration order, one at a time, on the calling thread.
//! Tests must not depend on that order or on state shared with other tests.

use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::context::TestContext;
use crate::engine::TestEngine;
use crate::error::RegistryError;
use crate::listener::ResultsListener;
use crate::location::Location;
use crate::outcome::{catch, Outcome, Raised};
use crate::scope::ScopedTest;

/// Type-erased test body.
type TestFn = Box<dyn Fn() -> Option<Raised> + Send + Sync>;

/// A registered test.
pub struct Test {
    name: String,
    location: Location,
    runner: TestFn,
}

impl Test {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the test was declared.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    fn run(&self) -> Option<Raised> {
        (self.runner)()
    }
}

impl std::fmt::Debug for Test {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Test")
            .field("name", &self.name)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Tests in registration order, with a name index into `order`.
#[derive(Default)]
struct TestTable {
    order: Vec<Arc<Test>>,
    index: FxHashMap<String, usize>,
}

/// Process-wide registry, created on first access.
static GLOBAL_REGISTRY: LazyLock<TestsRegistry> = LazyLock::new(TestsRegistry::new);

/// Maps test names to runnable tests.
pub struct TestsRegistry {
    engine: Arc<TestEngine>,
    config: RegistryConfig,
    tests: Mutex<TestTable>,
}

impl Default for TestsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TestsRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        TestsRegistry {
            engine: Arc::new(TestEngine::new()),
            config,
            tests: Mutex::new(TestTable::default()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static TestsRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn engine(&self) -> &Arc<TestEngine> {
        &self.engine
    }

    /// Hand `listener` to this registry's engine, replacing any previous one.
    pub fn set_listener(&self, listener: Box<dyn ResultsListener>) {
        self.engine.set_listener(listener);
    }

    /// Register `body` under `name`.
    ///
    /// `body` may return `()` or any `Result<T, E>`; an `Err` is reported as
    /// an escaping error, the same as a panic.
    pub fn register<F, O>(
        &self,
        name: impl Into<String>,
        location: Location,
        body: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> O + Send + Sync + 'static,
        O: Outcome,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName { location });
        }

        let mut table = self.tests.lock();
        let existing = table.index.get(&name).copied();
        let test = Arc::new(Test {
            name,
            location,
            runner: Box::new(move || body().into_raised()),
        });

        match (existing, self.config.duplicates) {
            (None, _) => {
                tracing::debug!(test = %test.name, %location, "registered test");
                let position = table.order.len();
                table.index.insert(test.name.clone(), position);
                table.order.push(test);
                Ok(())
            }
            (Some(position), DuplicatePolicy::Replace) => {
                tracing::debug!(test = %test.name, %location, "replaced test");
                table.order[position] = test;
                Ok(())
            }
            (Some(position), DuplicatePolicy::Reject) => Err(RegistryError::DuplicateTest {
                name: test.name.clone(),
                existing: table.order[position].location,
                duplicate: location,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.tests.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.lock().order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tests.lock().index.contains_key(name)
    }

    /// Registered names, in run order.
    pub fn names(&self) -> Vec<String> {
        self.tests
            .lock()
            .order
            .iter()
            .map(|test| test.name.clone())
            .collect()
    }

    /// Run every registered test once.
    ///
    /// The table is snapshotted first, so the registry is not locked while
    /// test bodies execute.
    pub fn run_all(&self) {
        let tests: Vec<Arc<Test>> = self.tests.lock().order.clone();
        tracing::debug!(count = tests.len(), "running registered tests");
        for test in &tests {
            self.run(test);
        }
    }

    /// Run one test behind the per-test boundary: an `Err` or panic escaping
    /// the body is reported as a failure of that test and never unwinds
    /// further.
    fn run(&self, test: &Test) {
        let context = TestContext::new(Arc::clone(&self.engine), test.name.clone(), test.location);
        let scope = ScopedTest::new(context);

        if let Some(raised) = catch(|| test.run()) {
            scope
                .context()
                .assertion_failed(test.location, format!("exception from test code: {raised}"));
        }
    }
}
