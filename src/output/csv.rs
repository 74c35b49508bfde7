use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::GenerationError;

/// Outcome of one table write.
#[derive(Debug, Clone)]
pub struct TableWrite {
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Append-or-create a table at `{base_dir}/{table_name}-{timestamp}.csv`.
///
/// The header row is written only when the file is newly created; an
/// existing file is appended to without one. An empty `table_name` is
/// replaced with a generated identifier, and an empty row set skips the
/// write entirely. Comma-separated, minimal quoting, UTF-8.
pub fn write_table_csv<T: Serialize>(
    base_dir: &Path,
    table_name: &str,
    timestamp: &str,
    columns: &[&str],
    rows: &[T],
) -> Result<Option<TableWrite>, GenerationError> {
    let table_name = if table_name.is_empty() {
        let substitute = uuid::Uuid::new_v4().simple().to_string();
        warn!(substitute = %substitute, "empty table name, using a generated identifier");
        substitute
    } else {
        table_name.to_string()
    };

    if rows.is_empty() {
        return Ok(None);
    }

    let path = base_dir.join(format!("{table_name}-{timestamp}.csv"));
    let is_new = !path.exists();
    if !is_new {
        warn!(path = %path.display(), "output path exists, appending without header");
    }
    debug!(
        path = %path.display(),
        header = is_new,
        "writing table rows"
    );

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let counting = CountingWriter::new(BufWriter::new(file));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    if is_new {
        writer.write_record(columns)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let counting = writer
        .into_inner()
        .map_err(|err| GenerationError::Io(err.into_error()))?;
    let bytes_written = counting.bytes_written();

    Ok(Some(TableWrite {
        path,
        bytes_written,
    }))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
