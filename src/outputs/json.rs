//! JSON data file.
//!
//! The structured sink is a single pretty-printed [`Report`]:
//!
//! ```json
//! {
//!   "last_updated": "2025-05-06T20:30:00+02:00",
//!   "source": "https://news.ycombinator.com/",
//!   "news_count": 1,
//!   "news": [
//!     { "id": 1, "title": "...", "url": "https://...", "comments": 142 }
//!   ]
//! }
//! ```

use crate::models::{Record, Report};
use chrono::{DateTime, TimeZone};
use tracing::{debug, instrument};

/// Serialize `records` plus run metadata into the JSON data file contents.
///
/// An empty `records` slice still produces a well-formed document.
#[instrument(level = "debug", skip_all, fields(count = records.len()))]
pub fn emit_structured<Tz>(
    records: &[Record],
    timestamp: &DateTime<Tz>,
    source: &str,
) -> Result<Vec<u8>, serde_json::Error>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let report = Report::new(records, timestamp, source);
    let mut bytes = serde_json::to_vec_pretty(&report)?;
    bytes.push(b'\n');
    debug!(bytes = bytes.len(), "Serialized report");
    Ok(bytes)
}

/// Parse a JSON data file back into a [`Report`].
pub fn decode_structured(bytes: &[u8]) -> Result<Report, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn records() -> Vec<Record> {
        vec![
            Record {
                ordinal: 1,
                title: "Show HN: Ünïcødé “quotes” & <tags>".to_string(),
                url: "https://example.test/a?x=1&y=2".to_string(),
                comment_count: 0,
            },
            Record {
                ordinal: 2,
                title: "Ask HN: Anything".to_string(),
                url: "https://news.ycombinator.com/item?id=42".to_string(),
                comment_count: 142,
            },
        ]
    }

    #[test]
    fn test_structured_round_trip() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 6, 20, 30, 0).unwrap();
        let bytes = emit_structured(&records(), &ts, "https://news.ycombinator.com/").unwrap();

        let report = decode_structured(&bytes).unwrap();
        assert_eq!(report.news, records());
        assert_eq!(report.news_count, 2);
        assert_eq!(report.source, "https://news.ycombinator.com/");
        assert_eq!(report.last_updated, "2025-05-06T20:30:00+00:00");
    }

    #[test]
    fn test_structured_layout() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = tz.with_ymd_and_hms(2025, 5, 6, 20, 30, 0).unwrap();
        let bytes = emit_structured(&records(), &ts, "https://news.ycombinator.com/").unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\"last_updated\": \"2025-05-06T20:30:00+02:00\""));
        assert!(text.contains("\"news_count\": 2"));
        assert!(text.contains("\"comments\": 142"));
        // Non-ASCII titles are written verbatim, not \u-escaped.
        assert!(text.contains("Ünïcødé"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_empty_result_set_is_well_formed() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let bytes = emit_structured(&[], &ts, "https://example.test/").unwrap();

        let report = decode_structured(&bytes).unwrap();
        assert_eq!(report.news_count, 0);
        assert!(report.news.is_empty());
    }
}
