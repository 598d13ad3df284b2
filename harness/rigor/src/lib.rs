//! rigor: a small unit-testing harness.
//!
//! Tests are plain functions or closures registered by name. Running them
//! makes each test's context current for the thread, so the `check_*!`
//! macros report into the right test without a context parameter. Results
//! are delivered to a single [`ResultsListener`].
//!
//! # Example
//!
//! ```text
//! #[rigor::suite]
//! mod arith {
//!     use rigor::prelude::*;
//!
//!     #[case]
//!     fn addition() {
//!         check_eq!(2 + 2, 4);
//!     }
//! }
//!
//! fn main() -> Result<(), rigor::RegistryError> {
//!     rigor::init_tracing();
//!     rigor::set_listener(Box::new(rigor::TracingListener::new()));
//!     arith::register(rigor::TestsRegistry::global())?;
//!     rigor::run_all_tests();
//!     Ok(())
//! }
//! ```
//!
//! # Tracing
//!
//! Set `RUST_LOG` and call [`init_tracing`] to see the harness's own
//! `debug`/`trace` output alongside whatever [`TracingListener`] emits:
//!
//! ```bash
//! RUST_LOG=rigor=info,rigor_core=debug ./my-test-driver
//! ```

use std::sync::Once;

mod tracing_listener;

pub use rigor_core::{
    capture, check, BoxError, DuplicatePolicy, Event, EventKind, EventLog, Location, Outcome,
    Raised, RecordingListener, RegistryConfig, RegistryError, Relation, ResultsListener,
    ScopedTest, Test, TestContext, TestEngine, TestsRegistry, Verdict,
};
pub use rigor_core::{
    check_eq, check_false, check_ge, check_gt, check_le, check_lt, check_no_raise, check_raises,
    check_raises_kind, location, report_error, report_warning,
};
pub use rigor_macros::suite;
pub use tracing_listener::TracingListener;

/// Everything a test module usually needs.
pub mod prelude {
    pub use crate::{
        check, check_eq, check_false, check_ge, check_gt, check_le, check_lt, check_no_raise,
        check_raises, check_raises_kind, location, report_error, report_warning, suite, Location,
        ScopedTest, TestContext,
    };
}

/// Register `body` under `name` in the global registry.
pub fn register_test<F, O>(
    name: impl Into<String>,
    location: Location,
    body: F,
) -> Result<(), RegistryError>
where
    F: Fn() -> O + Send + Sync + 'static,
    O: Outcome,
{
    TestsRegistry::global().register(name, location, body)
}

/// Install the listener of the global registry.
pub fn set_listener(listener: Box<dyn ResultsListener>) {
    TestsRegistry::global().set_listener(listener);
}

/// Run every test in the global registry.
pub fn run_all_tests() {
    TestsRegistry::global().run_all();
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this once at startup. Set `RUST_LOG` to control output:
/// - `RUST_LOG=debug` - registration and run boundaries
/// - `RUST_LOG=rigor_core=trace` - every delivered notification
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
