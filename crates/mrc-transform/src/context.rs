use chrono::{Datelike, Utc};

/// Knobs for one cleaning run.
#[derive(Debug, Clone, Copy)]
pub struct CleanOptions {
    /// Year used by the age/DOB reconciler. Pinned in tests and reproducible
    /// pipelines, wall clock otherwise.
    pub current_year: i32,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            current_year: Utc::now().year(),
        }
    }
}

impl CleanOptions {
    #[must_use]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }
}
