//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `trapscan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report serialization and user-facing output
//!
//! All core functionality is implemented in the library crate.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use trapscan::app::{init_logger_with, load_pages, print_summary};
use trapscan::{analyze_pages, Config, LogFormat, LogLevel};

/// Scans crawled web pages for dark patterns and tracking.
#[derive(Parser, Debug)]
#[command(name = "trapscan", version, about)]
struct Cli {
    /// Crawl JSON input: an array of pages or a single page object
    #[arg(short, long)]
    input: PathBuf,

    /// Write the full JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Minimum log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let pages = match load_pages(&cli.input) {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("trapscan error: {e:#}");
            process::exit(1);
        }
    };

    let config = Config::default();
    let result = analyze_pages(pages, &config);

    print_summary(&result);

    if let Some(output) = &cli.output {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&result)
        } else {
            serde_json::to_string(&result)
        }
        .context("Failed to serialize report")?;
        fs::write(output, json)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
        println!("Report saved to {}", output.display());
    }

    Ok(())
}
