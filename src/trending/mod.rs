// src/trending/mod.rs
// =============================================================================
// This module contains the trending-page scraping pipeline.
//
// Submodules:
// - fetch: Builds the trending URL and downloads the page over HTTP
// - parse: Extracts repository records out of the page's HTML
//
// This file (mod.rs) is the module root - it defines the record type the
// pipeline produces and the `get_trending` entry point that ties the two
// stages together.
// =============================================================================

mod fetch;
mod parse;

// Re-export public items from submodules
// This lets users write `trending::parse_trending()` instead of
// `trending::parse::parse_trending()`
pub use fetch::{fetch_page, trending_url};
pub use parse::parse_trending;

use serde::{Deserialize, Serialize};

use crate::cli::Period;
use crate::error::ScrapeError;

// One repository listing from the trending page
//
// Fixed shape: every field is always present, defaulting to an empty string
// or zero when the page doesn't render it, so downstream consumers never
// have to deal with missing keys. Field order here is also the CSV column
// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRepo {
    /// Repository name (the part after the owner's slash)
    pub name: String,
    /// Owner or organization name; empty if the page didn't show one
    pub developer: String,
    /// Short description; empty if absent
    pub description: String,
    /// Primary language as reported by GitHub; empty if unreported
    pub language: String,
    /// Total star count
    pub stars: u64,
    /// Total fork count
    pub forks: u64,
    /// Stars gained in the requested window; zero if not rendered
    pub stars_today: u64,
    /// Absolute repository URL
    pub url: String,
}

// Fetches and parses the trending page in one call
//
// Composes Fetcher -> Extractor, nothing more: filtering already happened
// through the request parameters, and aggregating several languages is the
// caller's job (call this in a loop with a different `language` each time).
// Each invocation builds a fresh HTTP client, so calls are fully independent.
pub async fn get_trending(
    period: Period,
    language: Option<&str>,
) -> Result<Vec<TrendingRepo>, ScrapeError> {
    let client = fetch::client()?;
    let url = trending_url(period, language);
    let html = fetch_page(&client, &url).await?;
    parse_trending(&html)
}
