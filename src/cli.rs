//! Command-line interface definitions for hn_digest.
//!
//! Every option can also come from the YAML file given with `--config`;
//! flags passed on the command line win over the file.

use clap::Parser;

/// Command-line arguments for the hn_digest application.
///
/// # Examples
///
/// ```sh
/// # Scrape the front page into ./data.json and ./index.html
/// hn_digest
///
/// # Top ten only, written to ./site
/// hn_digest --limit 10 -o ./site
///
/// # Settings from a file
/// hn_digest -c ./hn_digest.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing page to scrape; also the base for relative links
    #[arg(long, env = "HN_DIGEST_ORIGIN")]
    pub origin: Option<String>,

    /// Keep only the first N extracted items
    #[arg(short, long, env = "HN_DIGEST_LIMIT")]
    pub limit: Option<usize>,

    /// Directory the report files are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// File name of the JSON data file
    #[arg(long)]
    pub json_file: Option<String>,

    /// File name of the HTML report
    #[arg(long)]
    pub html_file: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Do not print the item listing to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hn_digest"]);

        assert_eq!(cli.limit, None);
        assert_eq!(cli.output_dir, None);
        assert_eq!(cli.config, None);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "hn_digest",
            "--origin",
            "https://example.test/",
            "--limit",
            "10",
            "--output-dir",
            "/tmp/out",
            "--json-file",
            "news.json",
            "--html-file",
            "news.html",
            "--timeout-secs",
            "5",
        ]);

        assert_eq!(cli.origin.as_deref(), Some("https://example.test/"));
        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.output_dir.as_deref(), Some("/tmp/out"));
        assert_eq!(cli.json_file.as_deref(), Some("news.json"));
        assert_eq!(cli.html_file.as_deref(), Some("news.html"));
        assert_eq!(cli.timeout_secs, Some(5));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["hn_digest", "-l", "3", "-o", "./site", "-c", "cfg.yaml", "-q"]);

        assert_eq!(cli.limit, Some(3));
        assert_eq!(cli.output_dir.as_deref(), Some("./site"));
        assert_eq!(cli.config.as_deref(), Some("cfg.yaml"));
        assert!(cli.quiet);
    }
}
