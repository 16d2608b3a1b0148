use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use mrc_ingest::read_csv_table;
use mrc_report::{write_cleaned_csv, write_summary_json};
use mrc_standards::columns::COLUMN_KINDS;
use mrc_transform::{CleanOptions, clean_table};

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;
use crate::types::CleanResult;

/// Run the full cleaning pipeline over one CSV file.
pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    let mut table = read_csv_table(&args.input)
        .with_context(|| format!("load input: {}", args.input.display()))?;
    info!(rows = table.rows.len(), "input loaded");

    let mut options = CleanOptions::default();
    if let Some(year) = args.current_year {
        options.current_year = year;
    }
    let report = clean_table(&mut table, &options);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let mut output = None;
    let mut summary_json = None;
    if args.dry_run {
        info!("dry run, skipping output files");
    } else {
        write_cleaned_csv(&table, &output_path)
            .with_context(|| format!("write output: {}", output_path.display()))?;
        output = Some(output_path);
        if let Some(path) = &args.summary_json {
            write_summary_json(&report, path)
                .with_context(|| format!("write summary: {}", path.display()))?;
            summary_json = Some(path.clone());
        }
    }

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        summary_json,
        rows_out: table.rows.len(),
        report,
    })
}

/// Print the required column schema.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Kind"]);
    apply_table_style(&mut table);
    for (name, kind) in COLUMN_KINDS {
        table.add_row(vec![name, kind]);
    }
    println!("{table}");
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("data");
    input.with_file_name(format!("cleaned_{stem}.csv"))
}
