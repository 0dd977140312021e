//! Data models for scraped listing items and the reports built from them.
//!
//! - [`Record`]: one fully extracted listing entry
//! - [`ResultSet`]: the ordered records produced by one extraction
//! - [`Report`]: the structured sink document wrapping a result set with run metadata
//!
//! Record fields serialize as `id`, `title`, `url` and `comments` so the data
//! file keeps the layout existing consumers already read.

use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};

/// A single listing entry extracted from the front page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    /// 1-based position among successfully extracted entries.
    #[serde(rename = "id")]
    pub ordinal: usize,
    /// Trimmed, non-empty title text.
    pub title: String,
    /// Absolute destination URL.
    pub url: String,
    /// Number of discussion comments, 0 when the page shows none.
    #[serde(rename = "comments")]
    pub comment_count: u32,
}

/// Records in source document order with dense ordinals.
pub type ResultSet = Vec<Record>;

/// The structured sink document.
///
/// # Fields
///
/// * `last_updated` - ISO-8601 generation timestamp
/// * `source` - origin the records were scraped from
/// * `news_count` - number of records in `news`
/// * `news` - the records themselves
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Report {
    pub last_updated: String,
    pub source: String,
    pub news_count: usize,
    pub news: ResultSet,
}

impl Report {
    /// Wrap `records` with run metadata.
    pub fn new<Tz>(records: &[Record], timestamp: &DateTime<Tz>, source: &str) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            last_updated: timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            source: source.to_string(),
            news_count: records.len(),
            news: records.to_vec(),
        }
    }
}
