//! Doctor ↔ diagnosis-code gap-filling.

use mrc_model::{CellValue, Table};
use mrc_standards::columns;
use mrc_standards::{diagnosis_for_doctor, doctor_for_diagnosis};
use tracing::debug;

/// Fill missing diagnosis codes from the doctor name and missing doctor
/// names from the diagnosis code, via the static bijection.
///
/// Gap-fill only: present values are never overwritten and an existing
/// doctor/code pair is never checked for agreement. Unmapped keys leave the
/// gap in place.
pub fn fill_doctor_diagnosis(table: &mut Table) {
    let (Some(doctor_idx), Some(code_idx)) = (
        table.column_index(columns::DOCTOR),
        table.column_index(columns::DIAGNOSIS_CODE),
    ) else {
        return;
    };
    let mut codes_filled = 0usize;
    let mut doctors_filled = 0usize;
    for row in &mut table.rows {
        if row[code_idx].is_missing()
            && let Some(code) = row[doctor_idx].as_text().and_then(diagnosis_for_doctor)
        {
            row[code_idx] = CellValue::Text(code.to_string());
            codes_filled += 1;
        }
        if row[doctor_idx].is_missing()
            && let Some(doctor) = row[code_idx].as_text().and_then(doctor_for_diagnosis)
        {
            row[doctor_idx] = CellValue::Text(doctor.to_string());
            doctors_filled += 1;
        }
    }
    debug!(codes_filled, doctors_filled, "doctor/diagnosis gap-fill");
}
