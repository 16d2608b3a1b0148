//! Schema normalization: make sure every required column exists.

use mrc_model::Table;
use mrc_standards::columns;
use tracing::debug;

/// Append each absent required column with missing cells in every row.
///
/// Existing columns and values are untouched and extra input columns are
/// preserved, so running this twice is a no-op. Never fails.
pub fn normalize_schema(table: &mut Table) {
    let before = table.columns.len();
    for column in columns::REQUIRED_COLUMNS {
        table.ensure_column(column);
    }
    let added = table.columns.len() - before;
    if added > 0 {
        debug!(added, "appended missing required columns");
    }
}
