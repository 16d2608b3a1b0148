//! Abbreviation expansion over the free-text columns.

use mrc_model::{CellValue, Table};
use mrc_standards::abbreviation_patterns;
use mrc_standards::columns;
use regex::NoExpand;

/// Expand every known abbreviation in `text`.
///
/// Dictionary entries apply sequentially to the same string in dictionary
/// order, so an expansion produced by one entry is visible to later entries
/// and overlapping abbreviations resolve deterministically.
pub fn expand_text(text: &str) -> String {
    let mut expanded = text.to_string();
    for &(ref regex, expansion) in abbreviation_patterns() {
        if regex.is_match(&expanded) {
            expanded = regex
                .replace_all(&expanded, NoExpand(expansion))
                .into_owned();
        }
    }
    expanded
}

fn expand_cell(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(text) => CellValue::Text(expand_text(text)),
        CellValue::Missing => CellValue::Missing,
    }
}

/// Rewrite the free-text columns.
///
/// `Symptoms` and `Medical_History` are expanded in place. `Clinical_Notes`
/// is expanded into a separate `Expanded_Clinical_Notes` column so the
/// fidelity scorer can still see the original; finalization swaps the two.
/// Missing text passes through unchanged.
pub fn expand_abbreviations(table: &mut Table) {
    for column in columns::FREE_TEXT_COLUMNS {
        let Some(idx) = table.column_index(column) else {
            continue;
        };
        let target = if column == columns::CLINICAL_NOTES {
            table.ensure_column(columns::EXPANDED_CLINICAL_NOTES)
        } else {
            idx
        };
        for row in &mut table.rows {
            row[target] = expand_cell(&row[idx]);
        }
    }
}
