//! Plain-text listing printed to stdout after a run.

use crate::models::Record;
use crate::utils::truncate_title;

/// Titles longer than this are shortened in the listing.
const MAX_TITLE_CHARS: usize = 50;

/// Render the listing, one line per record followed by a total.
pub fn render_listing(records: &[Record]) -> String {
    let mut out = String::from("Hacker News\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{}. Title: {}; Comments: {};\n",
            record.ordinal,
            truncate_title(&record.title, MAX_TITLE_CHARS),
            record.comment_count
        ));
    }
    out.push_str(&format!("\nTotal: {}\n", records.len()));
    out
}

pub fn print_listing(records: &[Record]) {
    print!("{}", render_listing(records));
}
