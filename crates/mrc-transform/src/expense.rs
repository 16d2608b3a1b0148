//! Expense sanitation: invalid values to missing, then median imputation.

use mrc_model::{CellValue, Table};
use mrc_standards::columns;
use tracing::debug;

use crate::numeric::{cell_f64, format_numeric};

/// Median of the valid expense values, or None for an empty set.
fn median(values: &mut Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Clip invalid expenses and impute the gaps.
///
/// Missing, non-numeric, and negative values all become missing first; the
/// median is then computed once over the remaining valid values and written
/// into every missing cell. When no valid value exists the median is
/// undefined and the cells stay missing.
pub fn sanitize_expenses(table: &mut Table) {
    let Some(expense_idx) = table.column_index(columns::EXPENSE) else {
        return;
    };
    let mut valid = Vec::new();
    for row in &mut table.rows {
        match cell_f64(&row[expense_idx]) {
            Some(value) if value >= 0.0 => valid.push(value),
            _ => row[expense_idx] = CellValue::Missing,
        }
    }
    let Some(median) = median(&mut valid) else {
        debug!("no valid expense values, leaving column missing");
        return;
    };
    let imputed = format_numeric(median);
    let mut filled = 0usize;
    for row in &mut table.rows {
        if row[expense_idx].is_missing() {
            row[expense_idx] = CellValue::Text(imputed.clone());
            filled += 1;
        }
    }
    debug!(filled, median, "imputed missing expenses");
}
