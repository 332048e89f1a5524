//! Global tracing subscriber setup.

use tempfile::tempdir;
use tictactoe_console::initialize_tracing;

#[test]
fn test_second_initialization_reports_error() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("game.log");

    initialize_tracing(Some(&log)).unwrap();
    assert!(log.exists());

    let err = initialize_tracing(None).unwrap_err();
    assert!(err.to_string().starts_with("Failed to initialize tracing"));
}

#[test]
fn test_unwritable_log_file_reported() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("missing").join("game.log");

    let err = initialize_tracing(Some(&log)).unwrap_err();
    assert!(err.to_string().starts_with("Failed to create log file"));
}
