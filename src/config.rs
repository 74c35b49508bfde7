use std::env;
use std::path::PathBuf;

/// Default output directory for the generated tables.
pub const GOODREADS_BASE_DIRECTORY: &str = "goodreads_data";

/// Resolve the base directory, honoring the `GOODREADS_BASE_DIRECTORY`
/// environment variable when set.
pub fn base_directory() -> PathBuf {
    env::var_os("GOODREADS_BASE_DIRECTORY")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(GOODREADS_BASE_DIRECTORY))
}
