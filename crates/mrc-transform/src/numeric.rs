//! Numeric cell parsing and formatting.

use mrc_model::CellValue;

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a cell as f64; `Missing` and unparseable text are both None, so
/// numeric predicates over the result are false for missing values.
pub fn cell_f64(cell: &CellValue) -> Option<f64> {
    cell.as_text().and_then(parse_f64)
}

/// Formats a floating-point number as a string without a trailing ".0".
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
