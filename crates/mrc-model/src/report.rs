/// Summary of one cleaning run.
///
/// The missing-value counts are measured on the table state immediately after
/// schema normalization, before any repair: they describe the quality of the
/// input, not of the output. `duplicates_removed` is likewise the pre-mutation
/// duplicate count; the number of rows actually dropped at finalization can
/// differ once abbreviation expansion has rewritten the text columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SummaryReport {
    #[serde(rename = "Total Records")]
    pub total_records: usize,
    #[serde(rename = "Duplicates Removed")]
    pub duplicates_removed: usize,
    #[serde(rename = "Missing Doctor Names Filled")]
    pub missing_doctor_names: usize,
    #[serde(rename = "Missing DOB Calculated")]
    pub missing_dob: usize,
    #[serde(rename = "Missing Age Filled")]
    pub missing_age: usize,
    #[serde(rename = "Average BLEU Score")]
    pub average_bleu: f64,
}

impl SummaryReport {
    /// Metric name/value pairs in report order, for display layers.
    pub fn metrics(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Records", self.total_records.to_string()),
            ("Duplicates Removed", self.duplicates_removed.to_string()),
            (
                "Missing Doctor Names Filled",
                self.missing_doctor_names.to_string(),
            ),
            ("Missing DOB Calculated", self.missing_dob.to_string()),
            ("Missing Age Filled", self.missing_age.to_string()),
            ("Average BLEU Score", format!("{:.4}", self.average_bleu)),
        ]
    }
}
