//! Core of the rigor test harness.
//!
//! This crate provides:
//! - Registration: [`TestsRegistry`] maps test names to runnable bodies
//! - Execution: each test runs inside a [`ScopedTest`] that makes its
//!   [`TestContext`] current for the calling thread
//! - Reporting: notifications flow context → [`TestEngine`] → [`ResultsListener`]
//! - Checks: the `check_*!` macros find the current context on their own, so
//!   test bodies never thread a context parameter through
//!
//! # Example
//!
//! ```text
//! use rigor_core::{check_eq, location, RecordingListener, TestsRegistry};
//!
//! let registry = TestsRegistry::new();
//! let (listener, log) = RecordingListener::new();
//! registry.set_listener(listener);
//!
//! registry.register("addition", location!(), || {
//!     check_eq!(2 + 2, 4);
//! })?;
//! registry.run_all();
//!
//! assert_eq!(log.terminal_outcomes(), vec![("addition".into(), true)]);
//! ```
//!
//! # Logging
//!
//! Registration and run boundaries are logged through `tracing` at `debug`
//! level; each delivered notification at `trace` level.

pub mod check;
mod config;
mod context;
mod engine;
mod error;
mod event;
mod listener;
mod location;
mod macros;
mod outcome;
mod registry;
mod scope;

pub use check::{Relation, Verdict};
pub use config::{DuplicatePolicy, RegistryConfig};
pub use context::TestContext;
pub use engine::TestEngine;
pub use error::RegistryError;
pub use event::{Event, EventKind};
pub use listener::{EventLog, RecordingListener, ResultsListener};
pub use location::Location;
pub use outcome::{capture, BoxError, Outcome, Raised};
pub use registry::{Test, TestsRegistry};
pub use scope::ScopedTest;
