use anyhow::{Context, Result};
use clap::Parser;
use review_flatten::config::{Config, ConfigFile};
use std::{io, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "review-flatten")]
#[command(about = "Flatten review reports and summary JSON into a single CSV")]
#[command(version)]
struct Args {
    /// Reports JSON (default: reports.json)
    #[arg(long, env = "REVIEW_FLATTEN_REPORTS")]
    reports: Option<PathBuf>,

    /// Summary JSON (default: summary.json)
    #[arg(long, env = "REVIEW_FLATTEN_SUMMARY")]
    summary: Option<PathBuf>,

    /// Output CSV (default: combined.csv)
    #[arg(short, long, env = "REVIEW_FLATTEN_OUTPUT")]
    output: Option<PathBuf>,

    /// YAML file supplying any paths not given above
    #[arg(short, long, env = "REVIEW_FLATTEN_CONFIG")]
    config: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging (stderr; stdout is reserved for results) ───────
    let default_filter = if args.verbose {
        "review_flatten=debug"
    } else {
        "review_flatten=info"
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) resolve paths ───────────────────────────────────────────────
    let file = args
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()
        .context("loading config file")?;
    let config = Config::resolve(args.reports, args.summary, args.output, file);
    info!(
        reports = %config.reports.display(),
        summary = %config.summary.display(),
        "startup"
    );

    // ─── 3) transform ───────────────────────────────────────────────────
    if args.stdout {
        let rows = review_flatten::run_to_writer(&config, io::stdout().lock())?;
        eprintln!("Wrote {} detail rows (plus summary) to stdout", rows);
        return Ok(());
    }

    let done = review_flatten::run(&config)?;
    println!(
        "Wrote {} detail rows (plus summary) to {}",
        done.rows,
        done.output.display()
    );
    Ok(())
}
