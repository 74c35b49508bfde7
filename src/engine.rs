use std::time::Instant;

use chrono::Local;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::errors::GenerationError;
use crate::event::FlatEvent;
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_table_csv;
use crate::project::{AuthorRow, BookRow, ReviewRow, UserRow};

/// Timestamp format for output file names.
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Entry point for generating review datasets.
///
/// Each `generate` call synthesizes one flat event per iteration, projects
/// it into four per-table accumulators grown in lockstep, then flushes the
/// tables to disk in a fixed order and clears the accumulators so the
/// instance can be reused. Not safe for concurrent `generate` calls.
#[derive(Debug)]
pub struct GoodreadsGenerator {
    options: GenerateOptions,
    rng: ChaCha8Rng,
    reviews: Vec<ReviewRow>,
    users: Vec<UserRow>,
    authors: Vec<AuthorRow>,
    books: Vec<BookRow>,
}

impl GoodreadsGenerator {
    /// Build a generator, creating the base directory if absent.
    pub fn new(options: GenerateOptions) -> Result<Self, GenerationError> {
        if !options.base_dir.exists() {
            std::fs::create_dir_all(&options.base_dir)?;
            info!(dir = %options.base_dir.display(), "created base directory");
        }

        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        Ok(Self {
            options,
            rng,
            reviews: Vec::new(),
            users: Vec::new(),
            authors: Vec::new(),
            books: Vec::new(),
        })
    }

    /// Generate `count` records and write the four tables to disk.
    ///
    /// A count of zero or less is a usage error reported to the caller;
    /// deciding whether to terminate the process belongs to the binary
    /// entry point.
    pub fn generate(&mut self, count: i64) -> Result<GenerationReport, GenerationError> {
        if count <= 0 {
            return Err(GenerationError::InvalidCount(count));
        }

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        info!(run_id = %run_id, records = count, "generation started");

        for _ in 0..count {
            let event = FlatEvent::synthesize(&mut self.rng);
            self.reviews.push(ReviewRow::from(&event));
            self.users.push(UserRow::from(&event));
            self.authors.push(AuthorRow::from(&event));
            self.books.push(BookRow::from(&event));
        }

        // One stamp per run: all four files share it.
        let timestamp = Local::now().format(FILE_STAMP_FORMAT).to_string();

        let reviews = std::mem::take(&mut self.reviews);
        let users = std::mem::take(&mut self.users);
        let authors = std::mem::take(&mut self.authors);
        let books = std::mem::take(&mut self.books);

        // Fixed table order: reviews, user, author, book.
        let mut tables = Vec::with_capacity(4);
        tables.push(self.flush_table("reviews", &timestamp, ReviewRow::COLUMNS, &reviews)?);
        tables.push(self.flush_table("user", &timestamp, UserRow::COLUMNS, &users)?);
        tables.push(self.flush_table("author", &timestamp, AuthorRow::COLUMNS, &authors)?);
        tables.push(self.flush_table("book", &timestamp, BookRow::COLUMNS, &books)?);

        let bytes_written = tables.iter().map(|table| table.bytes_written).sum();
        let report = GenerationReport {
            run_id: run_id.clone(),
            tables,
            duration_ms: start.elapsed().as_millis() as u64,
            bytes_written,
        };

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );

        Ok(report)
    }

    fn flush_table<T: Serialize>(
        &self,
        name: &str,
        timestamp: &str,
        columns: &[&str],
        rows: &[T],
    ) -> Result<TableReport, GenerationError> {
        info!(table = %name, rows = rows.len(), "writing table to disk");
        let outcome = write_table_csv(&self.options.base_dir, name, timestamp, columns, rows)?;

        Ok(TableReport {
            table: name.to_string(),
            rows_generated: rows.len() as u64,
            bytes_written: outcome.as_ref().map(|o| o.bytes_written).unwrap_or(0),
            path: outcome.map(|o| o.path),
        })
    }
}
