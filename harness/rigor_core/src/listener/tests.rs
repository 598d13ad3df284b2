use super::*;
use pretty_assertions::assert_eq;

fn loc() -> Location {
    Location::new("listener.rs", 1)
}

#[test]
fn recording_listener_keeps_delivery_order() {
    let (mut listener, log) = RecordingListener::new();
    listener.running_test("a", loc());
    listener.assertion_failed("a", loc(), "boom");
    listener.test_failed("a", loc());
    listener.running_test("b", loc());
    listener.test_succeeded("b", loc());

    assert_eq!(log.len(), 5);
    assert_eq!(
        log.terminal_outcomes(),
        vec![("a".to_string(), false), ("b".to_string(), true)]
    );
    assert_eq!(log.failures_for("a"), vec!["boom".to_string()]);
    assert!(log.failures_for("b").is_empty());
}

#[test]
fn event_log_is_shared_between_clones() {
    let log = EventLog::new();
    let mut listener = RecordingListener::with_log(log.clone());
    listener.report_warning("w", loc(), "careful");

    assert_eq!(
        log.events_for("w"),
        vec![Event::ReportWarning {
            test: "w".into(),
            location: loc(),
            message: "careful".into(),
        }]
    );
}

#[test]
fn event_log_clear_empties_log() {
    let (mut listener, log) = RecordingListener::new();
    listener.running_test("a", loc());
    assert!(!log.is_empty());
    log.clear();
    assert!(log.is_empty());
}

#[test]
fn event_log_is_thread_safe() {
    use std::thread;

    let (mut listener, log) = RecordingListener::new();
    let log2 = log.clone();

    let reader = thread::spawn(move || {
        for _ in 0..100 {
            let _ = log2.len();
        }
    });

    for _ in 0..100 {
        listener.running_test("t", loc());
    }

    assert!(reader.join().is_ok());
    assert_eq!(log.len(), 100);
}
