//! Medical abbreviation dictionary.
//!
//! An explicit ordered list, not a map: entries are applied sequentially to
//! the same string, so overlapping abbreviations resolve by this fixed order.
//! Matching is case-insensitive on whole words (regex `\b` boundaries), which
//! keeps "BP" from matching inside "BPM".

use std::sync::LazyLock;

use regex::Regex;

/// Abbreviation → expansion, in application order.
pub const ABBREVIATIONS: [(&str, &str); 14] = [
    ("DM", "Diabetes Mellitus"),
    ("HBP", "High Blood Pressure"),
    ("CAD", "Coronary Artery Disease"),
    ("BP", "Blood Pressure"),
    ("Rx", "Prescription"),
    ("SOB", "Shortness of Breath"),
    ("CP", "Chest Pain"),
    ("Pt", "Patient"),
    ("Hx", "History"),
    ("Dx", "Diagnosis"),
    ("CA", "Cancer"),
    ("PPI", "Proton Pump Inhibitor"),
    ("GERD", "Gastroesophageal Reflux Disease"),
    ("PRN", "As Needed"),
];

static PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ABBREVIATIONS
        .into_iter()
        .map(|(abbr, expansion)| {
            let pattern = format!(r"(?i)\b{abbr}\b");
            let regex = Regex::new(&pattern).expect("abbreviation pattern is valid");
            (regex, expansion)
        })
        .collect()
});

/// Compiled whole-word patterns paired with their expansions, in
/// [`ABBREVIATIONS`] order.
pub fn abbreviation_patterns() -> &'static [(Regex, &'static str)] {
    &PATTERNS
}
