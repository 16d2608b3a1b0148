//! Exact-duplicate row handling.
//!
//! The duplicate count is taken before any repair touches the table; the
//! actual removal runs at finalization, once the clinical-notes column has
//! been replaced by its expanded form. The two numbers are tracked
//! independently because expansion can make previously distinct rows equal.

use std::collections::HashSet;

use mrc_model::Table;

/// Rows that exactly equal an earlier row, all cells compared.
pub fn count_duplicate_rows(table: &Table) -> usize {
    let mut seen = HashSet::new();
    table
        .rows
        .iter()
        .filter(|row| !seen.insert(row.as_slice()))
        .count()
}

/// Drop rows that exactly equal an earlier row, keeping first occurrences.
/// Returns the number of rows removed.
pub fn drop_duplicate_rows(table: &mut Table) -> usize {
    let keep: Vec<bool> = {
        let mut seen = HashSet::new();
        table
            .rows
            .iter()
            .map(|row| seen.insert(row.as_slice()))
            .collect()
    };
    let before = table.rows.len();
    let mut flags = keep.into_iter();
    table.rows.retain(|_| flags.next().unwrap_or(true));
    before - table.rows.len()
}
