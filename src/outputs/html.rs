//! Static HTML report.
//!
//! Produces a self-contained page: a header with the item count and the
//! generation time, one table row per record, and a footer linking back to
//! the source. All record text is HTML-escaped.

use crate::models::Record;
use chrono::{DateTime, TimeZone};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::{debug, instrument};

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            margin: 20px;
        }
        h1 {
            text-align: center;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        th {
            background: #ff6600;
            color: white;
            padding: 10px;
            text-align: left;
            border: 1px solid #ccc;
        }
        td {
            padding: 8px;
            border: 1px solid #ccc;
        }
        tr:nth-child(even) {
            background: #f6f6ef;
        }
        a {
            color: #0066cc;
            text-decoration: none;
        }
        .source-link {
            text-align: center;
            margin-top: 20px;
        }
"#;

/// Render `records` as an HTML page.
///
/// # Arguments
///
/// * `records` - records to list, in order
/// * `timestamp` - generation time shown in the header
/// * `source` - origin linked from the footer
#[instrument(level = "debug", skip_all, fields(count = records.len()))]
pub fn emit_document<Tz>(records: &[Record], timestamp: &DateTime<Tz>, source: &str) -> Vec<u8>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n    <title>Hacker News</title>\n");
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <h1>Hacker News Digest</h1>\n");
    html.push_str(&format!("    <p>Total items: {}</p>\n", records.len()));
    html.push_str(&format!(
        "    <p>Updated: {}</p>\n",
        timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    html.push_str("    <table>\n        <tr>\n");
    for heading in ["#", "Title", "Comments", "Source"] {
        html.push_str(&format!("            <th>{heading}</th>\n"));
    }
    html.push_str("        </tr>\n");

    for record in records {
        html.push_str(&render_row(record));
    }

    html.push_str("    </table>\n\n");
    html.push_str(&format!(
        "    <div class=\"source-link\">\n        <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit the original Hacker News</a>\n    </div>\n",
        encode_double_quoted_attribute(source)
    ));
    html.push_str("</body>\n</html>\n");

    debug!(bytes = html.len(), "Rendered HTML report");
    html.into_bytes()
}

fn render_row(record: &Record) -> String {
    let href = encode_double_quoted_attribute(&record.url);
    format!(
        r#"        <tr>
            <td>{ordinal}</td>
            <td><a href="{href}" target="_blank" rel="noopener noreferrer">{title}</a></td>
            <td>{comments}</td>
            <td><a href="{href}" target="_blank" rel="noopener noreferrer">Open</a></td>
        </tr>
"#,
        ordinal = record.ordinal,
        title = encode_text(&record.title),
        comments = record.comment_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn render(records: &[Record]) -> String {
        let ts = Utc.with_ymd_and_hms(2025, 5, 6, 20, 30, 5).unwrap();
        String::from_utf8(emit_document(records, &ts, "https://news.ycombinator.com/")).unwrap()
    }

    fn record(ordinal: usize, title: &str, url: &str, comments: u32) -> Record {
        Record {
            ordinal,
            title: title.to_string(),
            url: url.to_string(),
            comment_count: comments,
        }
    }

    #[test]
    fn test_document_header_and_footer() {
        let html = render(&[record(1, "One", "https://a.test/1", 3)]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>Total items: 1</p>"));
        assert!(html.contains("<p>Updated: 2025-05-06 20:30:05</p>"));
        assert!(html.contains(r#"<a href="https://news.ycombinator.com/" target="_blank""#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_document_lists_every_record_in_order() {
        let records = vec![
            record(1, "First", "https://a.test/1", 0),
            record(2, "Second", "https://a.test/2", 142),
        ];
        let html = render(&records);

        let first = html.find(">First</a>").unwrap();
        let second = html.find(">Second</a>").unwrap();
        assert!(first < second);
        assert!(html.contains("<td>142</td>"));
        assert_eq!(html.matches("Open</a>").count(), 2);
    }

    #[test]
    fn test_document_escapes_markup() {
        let html = render(&[record(
            1,
            "<script>alert(1)</script> & friends",
            "https://a.test/?q=\"x\"&y=1",
            0,
        )]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; friends"));
        assert!(html.contains(r#"href="https://a.test/?q=&quot;x&quot;&amp;y=1""#));
    }
}
