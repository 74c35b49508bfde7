use std::fs;
use std::path::PathBuf;

use goodreads_faker::output::csv::write_table_csv;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct DemoRow {
    id: i64,
    label: String,
}

const DEMO_COLUMNS: &[&str] = &["id", "label"];

fn demo_rows(offset: i64) -> Vec<DemoRow> {
    (0..2)
        .map(|i| DemoRow {
            id: offset + i,
            label: format!("row_{}", offset + i),
        })
        .collect()
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("goodreads_writer_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

#[test]
fn distinct_timestamps_produce_independent_files() {
    let dir = temp_out_dir("distinct");

    let first = write_table_csv(&dir, "demo", "2024-01-01_10-00-00", DEMO_COLUMNS, &demo_rows(0))
        .expect("first write")
        .expect("first outcome");
    let second = write_table_csv(&dir, "demo", "2024-01-01_10-00-01", DEMO_COLUMNS, &demo_rows(2))
        .expect("second write")
        .expect("second outcome");

    assert_ne!(first.path, second.path);
    for path in [&first.path, &second.path] {
        let contents = fs::read_to_string(path).expect("read file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "id,label");
        assert_eq!(lines.len(), 3);
    }
}

#[test]
fn colliding_timestamp_appends_without_second_header() {
    let dir = temp_out_dir("collide");
    let stamp = "2024-01-01_10-00-00";

    write_table_csv(&dir, "demo", stamp, DEMO_COLUMNS, &demo_rows(0))
        .expect("first write")
        .expect("first outcome");
    let second = write_table_csv(&dir, "demo", stamp, DEMO_COLUMNS, &demo_rows(2))
        .expect("second write")
        .expect("second outcome");

    let contents = fs::read_to_string(&second.path).expect("read file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 5, "one header plus four rows");
    assert_eq!(lines[0], "id,label");
    assert_eq!(lines[1], "0,row_0");
    assert_eq!(lines[4], "3,row_3");
    assert_eq!(lines.iter().filter(|line| **line == "id,label").count(), 1);
}

#[test]
fn empty_rows_skip_the_write() {
    let dir = temp_out_dir("empty_rows");
    let rows: Vec<DemoRow> = Vec::new();

    let outcome =
        write_table_csv(&dir, "demo", "2024-01-01_10-00-00", DEMO_COLUMNS, &rows).expect("write");

    assert!(outcome.is_none());
    assert_eq!(fs::read_dir(&dir).expect("read dir").count(), 0);
}

#[test]
fn empty_table_name_gets_a_generated_identifier() {
    let dir = temp_out_dir("no_name");

    let outcome = write_table_csv(&dir, "", "2024-01-01_10-00-00", DEMO_COLUMNS, &demo_rows(0))
        .expect("write")
        .expect("outcome");

    let file_name = outcome
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("file name");
    assert!(!file_name.starts_with('-'));
    assert!(file_name.ends_with("-2024-01-01_10-00-00.csv"));
}

#[test]
fn round_trip_preserves_rows_and_column_order() {
    let dir = temp_out_dir("round_trip");
    let rows = demo_rows(10);

    let outcome = write_table_csv(&dir, "demo", "2024-01-01_10-00-00", DEMO_COLUMNS, &rows)
        .expect("write")
        .expect("outcome");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&outcome.path)
        .expect("open csv");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(|h| h.to_string())
        .collect();
    assert_eq!(headers, DEMO_COLUMNS);

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(records.len(), rows.len());
    for (record, row) in records.iter().zip(&rows) {
        assert_eq!(&record[0], row.id.to_string().as_str());
        assert_eq!(&record[1], row.label.as_str());
    }
}
