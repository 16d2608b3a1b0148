//! CLI library components for the Medical Record Cleaner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
