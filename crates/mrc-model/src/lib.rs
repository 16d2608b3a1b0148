pub mod error;
pub mod report;
pub mod table;

pub use error::{CleanError, Result};
pub use report::SummaryReport;
pub use table::{CellValue, Table};
