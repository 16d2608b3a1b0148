use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use mrc_model::{CellValue, CleanError, Result, Table};

fn read_error(action: &str, path: &Path, error: &csv::Error) -> CleanError {
    CleanError::Message(format!("{action} {}: {error}", path.display()))
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::from_raw(raw.trim_matches('\u{feff}'))
}

/// Read a CSV file into a [`Table`].
///
/// Column order follows the file; the cleaned output must preserve the input
/// layout, so headers are not reordered. Empty cells become
/// [`CellValue::Missing`]. An unreadable or malformed file fails the whole
/// run, no partial table is returned.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| read_error("read csv", path, &error))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| read_error("read headers", path, &error))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|error| read_error("read record", path, &error))?;
        let row: Vec<CellValue> = (0..table.columns.len())
            .map(|idx| normalize_cell(record.get(idx).unwrap_or("")))
            .collect();
        table.push_row(row);
    }
    debug!(
        rows = table.rows.len(),
        columns = table.columns.len(),
        "loaded csv table"
    );
    Ok(table)
}
