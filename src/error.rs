//! Error types for the scrape pipeline.
//!
//! Failures come in two tiers:
//! - [`FetchError`] is fatal to a run. Nothing is extracted and nothing is written.
//! - [`ItemMalformedError`] belongs to a single listing entry. The extractor
//!   logs it, drops that entry and moves on to the next one.
//!
//! [`AppError`] is what the top-level pipeline returns.

use reqwest::StatusCode;

/// Failure to retrieve or accept the source page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The configured origin is not an absolute http(s) URL.
    #[error("invalid source origin `{0}`")]
    InvalidOrigin(String),

    /// Connection, TLS, timeout or body-read failure.
    #[error("request to source failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("source responded with HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Why a single listing entry could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemMalformedError {
    #[error("title line has no link")]
    MissingTitleLink,

    #[error("title link has no href")]
    MissingHref,

    #[error("title link text is empty")]
    EmptyTitle,

    /// The entry is not laid out as a table row, so its metadata cannot be located.
    #[error("malformed metadata structure: {0}")]
    MalformedMetadata(String),
}

/// Failure to load the optional YAML settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Error returned by the run pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the run died before any extraction took place.
    pub fn is_fetch(&self) -> bool {
        matches!(self, AppError::Fetch(_))
    }
}
