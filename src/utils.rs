//! Small helpers shared by the pipeline and the emitters.

use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Shorten `title` to at most `max` characters for display.
///
/// Longer titles keep their first `max - 3` characters followed by `...`.
/// Counting is done in characters, so multi-byte text is never split.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_title("short", 50), "short");
/// assert_eq!(truncate_title("abcdefgh", 6), "abc...");
/// ```
pub fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut short: String = title.chars().take(keep).collect();
    short.push_str("...");
    short
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), std::io::Error> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    fs::write(&probe_path, b"").await?;
    let _ = fs::remove_file(&probe_path).await;
    info!("Output directory is writable");
    Ok(())
}
