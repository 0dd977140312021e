//! Hacker News front page extractor.
//!
//! The front page is a table. Every entry occupies a title row holding a
//! `span.titleline` with the story link, followed by a metadata row whose
//! `td.subtext` cell carries points, author, age and the comments link:
//!
//! ```text
//! <tr class="athing">  ... <span class="titleline"><a href="...">Title</a> ...</span>
//! <tr>                 ... <td class="subtext">... | <a href="item?id=1">142&nbsp;comments</a></td>
//! <tr class="spacer">
//! ```
//!
//! The title lines are the only thing used to decide how many entries exist.
//! Metadata rows may be missing for some entries (job postings, for example),
//! in which case the entry simply has zero comments.

use crate::error::{FetchError, ItemMalformedError};
use crate::models::{Record, ResultSet};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Origin scraped when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "https://news.ycombinator.com/";

static TITLE_LINE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.titleline").expect("static selector"));
static TITLE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("static selector"));
static SUBTEXT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.subtext").expect("static selector"));

/// Extraction settings.
///
/// `result_limit` is a caller-side cap applied with [`limit_results`] after
/// the whole page has been extracted. [`Extractor::extract`] ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Listing page exactly as configured; this is what gets fetched.
    pub source: Url,
    /// Site origin (`scheme://host[:port]/`) used to absolutize relative links.
    pub origin: Url,
    /// Keep only the first N records, e.g. `Some(10)` for a top-ten digest.
    pub result_limit: Option<usize>,
}

impl ExtractOptions {
    pub fn new(source: &str, result_limit: Option<usize>) -> Result<Self, FetchError> {
        let source = parse_source(source)?;
        Ok(Self {
            origin: site_origin(&source)?,
            source,
            result_limit,
        })
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        let source = Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL");
        Self {
            origin: source.clone(),
            source,
            result_limit: None,
        }
    }
}

/// Validate a configured listing URL without altering it.
///
/// It must be an absolute `http`/`https` URL with a host. Path and query are
/// kept, so `https://news.ycombinator.com/news?p=2` fetches page two.
pub fn parse_source(source: &str) -> Result<Url, FetchError> {
    let url = Url::parse(source.trim())
        .map_err(|_| FetchError::InvalidOrigin(source.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(FetchError::InvalidOrigin(source.to_string()));
    }
    Ok(url)
}

/// The `scheme://host[:port]/` origin of `source`.
///
/// A relative link `item?id=42` on any page of the site resolves to
/// `{origin}item?id=42`.
pub fn site_origin(source: &Url) -> Result<Url, FetchError> {
    Url::parse(&format!("{}/", source.origin().ascii_serialization()))
        .map_err(|_| FetchError::InvalidOrigin(source.to_string()))
}

/// Turn a link as found on the page into an absolute URL.
///
/// Links that already carry an `http://` or `https://` scheme are returned
/// unchanged, which makes the function idempotent. Protocol-relative links
/// (`//host/path`) take the origin's scheme. Anything else is treated as a
/// path on the origin host and appended to `origin`.
pub fn normalize_url(href: &str, origin: &Url) -> String {
    let href = href.trim();
    if has_network_scheme(href) {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        return format!("{}://{}", origin.scheme(), rest);
    }
    format!("{}{}", origin.as_str(), href.trim_start_matches('/'))
}

fn has_network_scheme(href: &str) -> bool {
    let lower = href.get(..8).unwrap_or(href).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Read a comment count out of the text of a metadata link.
///
/// Two conditions must hold: the text mentions `comment` (covers
/// `1 comment` and `142 comments`), and one of its whitespace separated
/// tokens is purely numeric. The first such token wins. Anything else,
/// including `discuss`, `hide` or a point total, yields 0.
pub fn parse_comment_count(text: &str) -> u32 {
    if !text.contains("comment") {
        return 0;
    }
    text.split_whitespace()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .find_map(|token| token.parse::<u32>().ok())
        .unwrap_or(0)
}

/// Keep at most `limit` records. Ordinals are left untouched.
pub fn limit_results(mut records: ResultSet, limit: Option<usize>) -> ResultSet {
    if let Some(n) = limit {
        records.truncate(n);
    }
    records
}

/// Fields of one entry before it is given an ordinal.
#[derive(Debug, PartialEq, Eq)]
struct ExtractedItem {
    title: String,
    url: String,
    comment_count: u32,
}

/// Stateless front page extractor. One instance can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract every well-formed entry of `document`, in document order.
    ///
    /// Malformed entries are skipped without consuming an ordinal.
    #[instrument(level = "info", skip_all, fields(origin = %self.options.origin))]
    pub fn extract(&self, document: &Html) -> ResultSet {
        let mut records = ResultSet::new();
        let mut blocks = 0usize;

        for (index, title_line) in document.select(&TITLE_LINE).enumerate() {
            blocks += 1;
            match self.extract_item(title_line) {
                Ok(item) => {
                    let record = Record {
                        ordinal: records.len() + 1,
                        title: item.title,
                        url: item.url,
                        comment_count: item.comment_count,
                    };
                    debug!(index, ordinal = record.ordinal, url = %record.url, "Extracted item");
                    records.push(record);
                }
                Err(e) => {
                    warn!(index, reason = %e, "Skipping malformed item");
                }
            }
        }

        info!(
            blocks,
            extracted = records.len(),
            skipped = blocks - records.len(),
            "Extracted listing items"
        );
        records
    }

    fn extract_item(&self, title_line: ElementRef<'_>) -> Result<ExtractedItem, ItemMalformedError> {
        let link = title_line
            .select(&TITLE_LINK)
            .next()
            .ok_or(ItemMalformedError::MissingTitleLink)?;

        let href = link
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(ItemMalformedError::MissingHref)?;

        let title = link.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            return Err(ItemMalformedError::EmptyTitle);
        }

        let comment_count = metadata_cell(title_line)?
            .and_then(|cell| cell.select(&LINK).last())
            .map(|a| parse_comment_count(&a.text().collect::<String>()))
            .unwrap_or(0);

        Ok(ExtractedItem {
            title,
            url: normalize_url(href, &self.options.origin),
            comment_count,
        })
    }
}

/// Locate the `td.subtext` cell belonging to the entry of `title_line`.
///
/// Only the first table row after the entry's own row is considered. `None`
/// means the entry has no metadata; an entry outside any table row is malformed.
fn metadata_cell(title_line: ElementRef<'_>) -> Result<Option<ElementRef<'_>>, ItemMalformedError> {
    let row = title_line
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr")
        .ok_or_else(|| {
            ItemMalformedError::MalformedMetadata("title line is not inside a table row".to_string())
        })?;

    let next_row = row
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr");

    Ok(next_row.and_then(|tr| tr.select(&SUBTEXT).next()))
}
