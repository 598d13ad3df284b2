//! The process-wide registry behind the free functions.

use pretty_assertions::assert_eq;
use rigor::{RecordingListener, RegistryError};

#[test]
fn test_global_registry_runs_registered_tests() -> Result<(), RegistryError> {
    let (listener, log) = RecordingListener::new();
    rigor::set_listener(listener);

    rigor::register_test("global::passes", rigor::location!(), || {
        rigor::check!(true);
    })?;
    rigor::register_test("global::fails", rigor::location!(), || {
        rigor::report_error!("failed on purpose: {}", 42);
    })?;

    rigor::run_all_tests();

    assert_eq!(
        log.terminal_outcomes(),
        vec![
            ("global::passes".into(), true),
            ("global::fails".into(), false),
        ]
    );
    assert_eq!(
        log.failures_for("global::fails"),
        vec!["failed on purpose: 42".to_owned()]
    );
    assert!(rigor::TestsRegistry::global().contains("global::passes"));
    Ok(())
}

#[test]
fn test_init_tracing_is_idempotent() {
    rigor::init_tracing();
    rigor::init_tracing();
}
