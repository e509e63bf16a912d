//! Integration test for [`hibot_core::init_tracing`]. Lives in its own test
//! binary because the subscriber is process-global.

use hibot_core::init_tracing;

/// **Test: init_tracing creates the log file, records events, and rejects a second init.**
///
/// **Setup:** temp directory for the log file.
/// **Action:** `init_tracing`, emit one error event, `init_tracing` again.
/// **Expected:** first init succeeds and the file receives output; second init fails.
#[test]
fn test_init_tracing_writes_file_and_is_once_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("errors.log");
    let path = path.to_str().unwrap();

    init_tracing(path).unwrap();
    tracing::error!("logger smoke event");

    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.contains("logger smoke event"));

    assert!(init_tracing(path).is_err());
}
