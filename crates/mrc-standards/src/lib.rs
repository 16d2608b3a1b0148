//! Process-wide constant reference data for the record cleaner.
//!
//! Everything here is fixed data, not configuration: the required column
//! schema, the doctor↔diagnosis bijection, and the ordered abbreviation
//! dictionary. Tables are immutable statics initialized once on first use.

pub mod abbreviations;
pub mod columns;
pub mod doctors;

pub use abbreviations::{ABBREVIATIONS, abbreviation_patterns};
pub use doctors::{DOCTOR_DIAGNOSIS, diagnosis_for_doctor, doctor_for_diagnosis};
