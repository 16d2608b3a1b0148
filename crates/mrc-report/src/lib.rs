//! Output writers for the record cleaner.
//!
//! The cleaned table goes out as CSV (missing cells as empty fields, column
//! order preserved) and the summary report as pretty-printed JSON keyed by
//! the display metric names.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use mrc_model::{SummaryReport, Table};

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    Ok(())
}

/// Write the cleaned table to `path` as CSV.
pub fn write_cleaned_csv(table: &Table, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        let record: Vec<&str> = row.iter().map(|cell| cell.as_text().unwrap_or("")).collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

/// Write the summary report to `path` as JSON.
pub fn write_summary_json(report: &SummaryReport, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(report).context("serialize summary report")?;
    fs::write(path, json).with_context(|| format!("write summary: {}", path.display()))?;
    Ok(())
}
