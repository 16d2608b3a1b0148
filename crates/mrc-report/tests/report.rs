//! Tests for the CSV and JSON output writers.

use mrc_model::{CellValue, SummaryReport, Table};
use mrc_report::{write_cleaned_csv, write_summary_json};

fn sample_table() -> Table {
    let mut table = Table::new(vec!["id".to_string(), "Clinical_Notes".to_string()]);
    table.push_row(vec![
        CellValue::Text("1".to_string()),
        CellValue::Text("Patient stable".to_string()),
    ]);
    table.push_row(vec![CellValue::Text("2".to_string()), CellValue::Missing]);
    table
}

#[test]
fn csv_round_trips_values_and_missing_cells() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("cleaned.csv");
    write_cleaned_csv(&sample_table(), &path).expect("write csv");
    let contents = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "id,Clinical_Notes\n1,Patient stable\n2,\n");
}

#[test]
fn csv_writer_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested/out/cleaned.csv");
    write_cleaned_csv(&sample_table(), &path).expect("write csv");
    assert!(path.exists());
}

#[test]
fn summary_json_uses_display_names() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("summary.json");
    let report = SummaryReport {
        total_records: 2,
        duplicates_removed: 0,
        missing_doctor_names: 1,
        missing_dob: 0,
        missing_age: 1,
        average_bleu: 0.5,
    };
    write_summary_json(&report, &path).expect("write summary");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read back"))
            .expect("parse json");
    assert_eq!(value["Total Records"], 2);
    assert_eq!(value["Missing Age Filled"], 1);
    assert_eq!(value["Average BLEU Score"], 0.5);
}
