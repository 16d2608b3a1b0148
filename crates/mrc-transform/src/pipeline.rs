//! The cleaning pipeline: one table, mutated in place through a fixed stage
//! order, returning the summary report.

use mrc_model::{SummaryReport, Table};
use mrc_standards::columns;
use tracing::info;

use crate::bleu::{mean_score, score_expansion_fidelity};
use crate::context::CleanOptions;
use crate::dedupe::{count_duplicate_rows, drop_duplicate_rows};
use crate::schema::normalize_schema;
use crate::{age, doctor, expand, expense};

fn count_missing(table: &Table, column: &str) -> usize {
    let Some(idx) = table.column_index(column) else {
        return 0;
    };
    table.rows.iter().filter(|row| row[idx].is_missing()).count()
}

/// Drop the original clinical notes, promote the expanded column to its
/// name, then remove exact-duplicate rows. Equality runs over the final
/// column set; per-row scores were never part of the table. Returns the
/// number of rows dropped, which may differ from the pre-mutation duplicate
/// count.
fn finalize(table: &mut Table) -> usize {
    table.drop_column(columns::CLINICAL_NOTES);
    table.rename_column(columns::EXPANDED_CLINICAL_NOTES, columns::CLINICAL_NOTES);
    drop_duplicate_rows(table)
}

/// Run every cleaning stage over `table` and assemble the summary report.
///
/// The duplicate and missing-value metrics are snapshotted right after
/// schema normalization, before any repair: they describe the original data
/// quality. Stages never fail; per-cell problems degrade to missing cells.
pub fn clean_table(table: &mut Table, options: &CleanOptions) -> SummaryReport {
    normalize_schema(table);

    let total_records = table.rows.len();
    let duplicates_removed = count_duplicate_rows(table);
    let missing_doctor_names = count_missing(table, columns::DOCTOR);
    let missing_dob = count_missing(table, columns::DATE_OF_BIRTH);
    let missing_age = count_missing(table, columns::AGE);
    info!(
        total_records,
        duplicates_removed, missing_doctor_names, missing_dob, missing_age, "intake metrics"
    );

    age::reconcile_age_dob(table, options.current_year);
    doctor::fill_doctor_diagnosis(table);
    expense::sanitize_expenses(table);
    expand::expand_abbreviations(table);

    let scores = score_expansion_fidelity(table);
    let average_bleu = mean_score(&scores);

    let rows_dropped = finalize(table);
    info!(
        rows_dropped,
        average_bleu,
        rows_out = table.rows.len(),
        "pipeline complete"
    );

    SummaryReport {
        total_records,
        duplicates_removed,
        missing_doctor_names,
        missing_dob,
        missing_age,
        average_bleu,
    }
}
