use std::path::PathBuf;

use mrc_model::SummaryReport;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// None on a dry run.
    pub output: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
    /// Rows in the cleaned table, after duplicate removal.
    pub rows_out: usize,
    pub report: SummaryReport,
}
