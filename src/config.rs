//! Run settings.
//!
//! Settings are layered: built-in defaults, then the optional YAML file,
//! then command-line flags. Example file:
//!
//! ```yaml
//! origin: https://news.ycombinator.com/
//! result_limit: 10
//! output_dir: ./site
//! json_file: data.json
//! html_file: index.html
//! timeout_secs: 30
//! ```

use crate::cli::Cli;
use crate::error::{ConfigError, FetchError};
use crate::scrapers::hackernews::{DEFAULT_ORIGIN, ExtractOptions};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};

pub const DEFAULT_JSON_FILE: &str = "data.json";
pub const DEFAULT_HTML_FILE: &str = "index.html";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of the YAML settings file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub origin: Option<String>,
    pub result_limit: Option<usize>,
    pub output_dir: Option<String>,
    pub json_file: Option<String>,
    pub html_file: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Read and parse a YAML settings file.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn load_file(path: &str) -> Result<FileConfig, ConfigError> {
    let raw = fs::read_to_string(path).await.map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let config = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })?;
    info!("Loaded settings file");
    Ok(config)
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fetch URL, link origin and result limit handed to the extractor.
    pub extract: ExtractOptions,
    pub output_dir: PathBuf,
    pub json_file: String,
    pub html_file: String,
    pub timeout: Duration,
    pub quiet: bool,
}

impl Settings {
    /// Merge CLI flags over `file` over defaults.
    ///
    /// Fails only when the resulting origin is not a usable http(s) URL.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, FetchError> {
        let origin = cli
            .origin
            .clone()
            .or(file.origin)
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

        Ok(Self {
            extract: ExtractOptions::new(&origin, cli.limit.or(file.result_limit))?,
            output_dir: PathBuf::from(
                cli.output_dir
                    .clone()
                    .or(file.output_dir)
                    .unwrap_or_else(|| ".".to_string()),
            ),
            json_file: cli
                .json_file
                .clone()
                .or(file.json_file)
                .unwrap_or_else(|| DEFAULT_JSON_FILE.to_string()),
            html_file: cli
                .html_file
                .clone()
                .or(file.html_file)
                .unwrap_or_else(|| DEFAULT_HTML_FILE.to_string()),
            timeout: Duration::from_secs(
                cli.timeout_secs
                    .or(file.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            quiet: cli.quiet,
        })
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(&self.html_file)
    }
}
