//! Age / date-of-birth reconciliation.

use chrono::{Datelike, NaiveDate};

use mrc_model::{CellValue, Table};
use mrc_standards::columns;

use crate::numeric::cell_f64;

const AGE_MAX: f64 = 110.0;

/// Anomalous age: missing, negative, or greater than 110.
fn is_anomalous(age: Option<f64>) -> bool {
    match age {
        Some(age) => age < 0.0 || age > AGE_MAX,
        None => true,
    }
}

/// Year of a "YYYY-MM-DD" date string; None when unparseable.
fn birth_year(dob: &str) -> Option<i32> {
    NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

/// Cross-fill age and date of birth.
///
/// An anomalous stored age is replaced by `current_year - birth_year`, or
/// cleared to missing when the DOB does not parse. A missing DOB is
/// synthesized as `{current_year - floor(age)}-01-01` when the stored age
/// lies strictly inside (0, 110).
///
/// Both directions read the row's original age/DOB pair: a repaired age does
/// not feed DOB synthesis in the same pass. A row that was bad on both sides
/// can therefore end up mutually inconsistent; that is accepted behavior.
pub fn reconcile_age_dob(table: &mut Table, current_year: i32) {
    let (Some(age_idx), Some(dob_idx)) = (
        table.column_index(columns::AGE),
        table.column_index(columns::DATE_OF_BIRTH),
    ) else {
        return;
    };
    for row in &mut table.rows {
        let original_age = cell_f64(&row[age_idx]);
        let original_dob = row[dob_idx].clone();

        if is_anomalous(original_age) {
            row[age_idx] = match original_dob.as_text().and_then(birth_year) {
                Some(year) => CellValue::Text((current_year - year).to_string()),
                None => CellValue::Missing,
            };
        }

        if original_dob.is_missing()
            && let Some(age) = original_age
            && age > 0.0
            && age < AGE_MAX
        {
            let birth = current_year - age.floor() as i32;
            row[dob_idx] = CellValue::Text(format!("{birth}-01-01"));
        }
    }
}
