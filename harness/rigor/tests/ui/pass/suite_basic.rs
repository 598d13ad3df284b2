#[rigor::suite]
mod smoke {
    use rigor::prelude::*;

    #[case]
    fn arithmetic() {
        check_eq!(1 + 1, 2);
    }

    #[case(name = "strings")]
    fn string_ops() {
        check!("abc".starts_with('a'));
    }
}

fn main() -> Result<(), rigor::RegistryError> {
    let (listener, log) = rigor::RecordingListener::new();
    rigor::set_listener(listener);
    smoke::register(rigor::TestsRegistry::global())?;
    rigor::run_all_tests();
    assert!(log.failures_for("arithmetic").is_empty());
    assert_eq!(log.terminal_outcomes().len(), 2);
    Ok(())
}
