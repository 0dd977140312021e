//! Report emitters.
//!
//! Emitters are pure: they turn a [`crate::models::ResultSet`] and a
//! generation timestamp into bytes and never reorder or filter records.
//! Writing the bytes to disk is done by [`write_output`].
//!
//! # Submodules
//!
//! - [`json`]: the structured data file (`data.json`)
//! - [`html`]: the human-readable report page (`index.html`)
//! - [`console`]: the plain-text listing printed after a run
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── data.json
//! └── index.html
//! ```

pub mod console;
pub mod html;
pub mod json;

use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Write emitted bytes to `path`, replacing any previous file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_output(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    fs::write(path, bytes).await?;
    info!(bytes = bytes.len(), "Wrote output file");
    Ok(())
}
