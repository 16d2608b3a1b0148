//! CLI argument definitions for the record cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mrc",
    version,
    about = "Medical Record Cleaner - repair and normalize tabular healthcare data",
    long_about = "Clean a CSV of healthcare records in a single pass.\n\n\
                  Repairs missing or invalid fields with deterministic rules and static\n\
                  lookup tables, expands medical abbreviations in free-text columns, and\n\
                  writes a cleaned CSV plus a summary report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a record CSV and write the cleaned dataset.
    Clean(CleanArgs),

    /// List the required column schema.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output path for the cleaned CSV (default: cleaned_<input name> next to
    /// the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the summary report as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Year used when reconciling age and date of birth (default: the
    /// current wall-clock year). Pin this for reproducible runs.
    #[arg(long = "current-year", value_name = "YEAR")]
    pub current_year: Option<i32>,

    /// Clean and report without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
