//! Listing page scrapers.
//!
//! Each scraper takes an already parsed [`scraper::Html`] document and turns
//! it into a [`crate::models::ResultSet`]. Scrapers never perform I/O; the
//! document comes from [`crate::fetch`] and the records go to [`crate::outputs`].
//!
//! # Supported Sources
//!
//! | Source | Module | Item marker | Metadata row |
//! |--------|--------|-------------|--------------|
//! | Hacker News | [`hackernews`] | `span.titleline` | next `tr` holding `td.subtext` |
//!
//! # Fault Isolation
//!
//! An entry whose structure cannot be read is logged and skipped. The rest of
//! the page is still extracted and ordinals stay dense.

pub mod hackernews;
