use std::fs;
use std::path::PathBuf;

use goodreads_faker::{GenerationError, logging};
use tracing::info;

fn temp_log_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("goodreads_logs_{}", uuid::Uuid::new_v4()));
    dir
}

#[test]
fn init_creates_log_file_and_rejects_reinit() {
    let log_dir = temp_log_dir();

    logging::init_logging(&log_dir).expect("first init");
    info!("logging smoke event");

    let log_file = log_dir.join("info.log");
    assert!(log_file.exists());
    let contents = fs::read_to_string(&log_file).expect("read log file");
    assert!(contents.contains("logging smoke event"));

    // A second subscriber cannot be installed in the same process.
    let err = logging::init_logging(&log_dir).expect_err("second init must fail");
    assert!(matches!(err, GenerationError::Logging(_)));
}
