//! Flatten a borrower-document review (a reports document plus a summary
//! document) into one spreadsheet-friendly CSV.

pub mod config;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod model;
pub mod schema;
pub mod writer;

use anyhow::{Context, Result};
use std::{io::Write, path::PathBuf};
use tracing::info;

pub use config::Config;
pub use flatten::{flatten, Flattened};
pub use schema::{Column, Record, Screener};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Detail rows written, excluding the summary line and header.
    pub rows: usize,
    pub output: PathBuf,
}

/// Load both inputs and flatten them. Nothing is written.
pub fn prepare(config: &Config) -> Result<Flattened> {
    let reports = loader::load_reports(&config.reports).context("loading reports document")?;
    let summary = loader::load_summary(&config.summary).context("loading summary document")?;
    info!(
        reports = reports.reports.len(),
        summary_issues = summary.report.issues.len(),
        "inputs loaded"
    );
    Ok(flatten(&reports, &summary))
}

/// Full batch run: both inputs are loaded before the output file is touched.
pub fn run(config: &Config) -> Result<RunSummary> {
    let flat = prepare(config)?;
    let rows = writer::write_csv(&config.output, &flat.summary_text, &flat.records)
        .with_context(|| format!("writing {}", config.output.display()))?;
    Ok(RunSummary {
        rows,
        output: config.output.clone(),
    })
}

/// Like [`run`], but streams the CSV to `out` instead of `config.output`.
pub fn run_to_writer<W: Write>(config: &Config, out: W) -> Result<usize> {
    let flat = prepare(config)?;
    let rows = writer::write_records(out, &flat.summary_text, &flat.records)
        .context("writing CSV")?;
    Ok(rows)
}
