use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory where the four CSV tables are written.
    pub base_dir: PathBuf,
    /// Fixed RNG seed for reproducible runs; OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            base_dir: config::base_directory(),
            seed: None,
        }
    }
}

/// Summary of one written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows_generated: u64,
    pub bytes_written: u64,
    /// None when the table had no rows and the write was skipped.
    pub path: Option<PathBuf>,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub tables: Vec<TableReport>,
    pub duration_ms: u64,
    pub bytes_written: u64,
}
