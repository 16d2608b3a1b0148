//! Doctor ↔ diagnosis-code lookups.
//!
//! A fixed bijection between seven doctor names and their primary diagnosis
//! codes. Used only for gap-filling: an existing Doctor/Diagnosis_Code pair
//! is never validated against this table.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Doctor name to diagnosis code, in source order.
pub const DOCTOR_DIAGNOSIS: [(&str, &str); 7] = [
    ("Dr. John Smith (Endocrinologist)", "E11"),
    ("Dr. Jane Doe (Cardiologist)", "I10"),
    ("Dr. Alex Brown (Pulmonologist)", "J45"),
    ("Dr. Emma White (Oncologist)", "C34.1"),
    ("Dr. Noah Carter (Orthopedic Surgeon)", "M54.5"),
    ("Dr. Ava Wilson (Gastroenterologist)", "K21.9"),
    ("Dr. Liam Johnson (Nephrologist)", "N18.9"),
];

static FORWARD: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DOCTOR_DIAGNOSIS.into_iter().collect());

static REVERSE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    DOCTOR_DIAGNOSIS
        .into_iter()
        .map(|(doctor, code)| (code, doctor))
        .collect()
});

/// Diagnosis code for a doctor, or None for an unmapped name.
pub fn diagnosis_for_doctor(doctor: &str) -> Option<&'static str> {
    FORWARD.get(doctor).copied()
}

/// Doctor for a diagnosis code, or None for an unmapped code.
pub fn doctor_for_diagnosis(code: &str) -> Option<&'static str> {
    REVERSE.get(code).copied()
}
