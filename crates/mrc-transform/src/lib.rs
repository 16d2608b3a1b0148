//! Cleaning transforms for tabular healthcare records.
//!
//! A linear sequence of in-place table transforms: schema repair, age/DOB
//! reconciliation, doctor/diagnosis gap-filling, expense sanitation,
//! abbreviation expansion, BLEU fidelity scoring, and duplicate removal.
//! [`clean_table`] runs the whole sequence and returns the summary report.

pub mod age;
pub mod bleu;
pub mod context;
pub mod dedupe;
pub mod doctor;
pub mod expand;
pub mod expense;
pub mod numeric;
pub mod pipeline;
pub mod schema;

pub use bleu::{mean_score, score_expansion_fidelity, sentence_bleu};
pub use context::CleanOptions;
pub use dedupe::{count_duplicate_rows, drop_duplicate_rows};
pub use expand::{expand_abbreviations, expand_text};
pub use pipeline::clean_table;
pub use schema::normalize_schema;
