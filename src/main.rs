//! # hn_digest
//!
//! Scrapes the Hacker News front page and writes the listed stories to a
//! JSON data file and a static HTML report.
//!
//! ## Usage
//!
//! ```sh
//! hn_digest -o ./site --limit 10
//! ```
//!
//! ## Architecture
//!
//! A run is a strict sequence:
//! 1. **Fetching**: download and parse the listing page ([`fetch`])
//! 2. **Extraction**: turn the page into ordered records ([`scrapers::hackernews`])
//! 3. **Output**: print the listing and write `data.json` and `index.html` ([`outputs`])
//!
//! A failed fetch ends the run before anything is written. Entries that
//! cannot be read are skipped individually during extraction.

use chrono::{DateTime, Local};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use config::{FileConfig, Settings};
use error::AppError;
use fetch::{FetchDocument, HttpFetcher};
use outputs::{console, html, json, write_output};
use scrapers::hackernews::{Extractor, limit_results};
use utils::ensure_writable_dir;

/// What a completed run produced.
#[derive(Debug, PartialEq, Eq)]
struct RunSummary {
    extracted: usize,
    json_path: PathBuf,
    html_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("hn_digest starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match try_main(&args).await {
        Ok(summary) => {
            let elapsed = start_time.elapsed();
            info!(
                extracted = summary.extracted,
                json = %summary.json_path.display(),
                html = ?summary.html_path,
                millis = elapsed.as_millis() as u64,
                "Execution complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) if e.is_fetch() => {
            error!(error = %e, "Could not retrieve the listing page; no output written");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}

async fn try_main(args: &Cli) -> Result<RunSummary, AppError> {
    let file_config = match &args.config {
        Some(path) => config::load_file(path).await?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(args, file_config)?;
    info!(
        source = %settings.extract.source,
        limit = ?settings.extract.result_limit,
        output_dir = %settings.output_dir.display(),
        "Resolved settings"
    );

    let fetcher = HttpFetcher::new(settings.timeout)?;
    run(&fetcher, &settings, Local::now()).await
}

/// Fetch, extract and emit once.
///
/// Nothing touches the filesystem until the fetch has succeeded. An empty
/// result still gets a data file but no HTML report.
#[instrument(level = "info", skip_all, fields(source = %settings.extract.source))]
async fn run<F: FetchDocument>(
    fetcher: &F,
    settings: &Settings,
    now: DateTime<Local>,
) -> Result<RunSummary, AppError> {
    let extracted = {
        let document = fetcher.fetch(&settings.extract.source).await?;
        Extractor::new(settings.extract.clone()).extract(&document)
    };
    let found = extracted.len();
    let records = limit_results(extracted, settings.extract.result_limit);

    if found == 0 {
        warn!("No records extracted");
    } else if records.is_empty() {
        warn!(found, limit = ?settings.extract.result_limit, "Result limit left no records");
    } else if !settings.quiet {
        console::print_listing(&records);
    }

    ensure_writable_dir(&settings.output_dir).await?;
    let source = settings.extract.source.as_str();

    let json_path = settings.json_path();
    let json_bytes = json::emit_structured(&records, &now, source)?;
    write_output(&json_path, &json_bytes).await?;

    let html_path = if records.is_empty() {
        info!("Skipping HTML report for empty result");
        None
    } else {
        let path = settings.html_path();
        write_output(&path, &html::emit_document(&records, &now, source)).await?;
        Some(path)
    };

    Ok(RunSummary {
        extracted: records.len(),
        json_path,
        html_path,
    })
}
