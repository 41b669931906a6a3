// src/trending/fetch.rs
// =============================================================================
// This module downloads the trending page.
//
// Strategy:
// - Build the page URL from the time window and optional language filter
// - Issue a single GET with a realistic browser User-Agent
//   (GitHub may reject default client signatures)
// - No retries: a network failure or bad status propagates immediately
// =============================================================================

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::cli::Period;
use crate::error::ScrapeError;

/// The trending page lives here; language filters become a path segment
pub const BASE_URL: &str = "https://github.com/trending";

// A mainstream desktop Chrome signature
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Creates the HTTP client used for the page request
//
// Headers are set once on the client so every request carries them.
// 10 second timeout - the only cancellation mechanism we provide.
pub fn client() -> Result<Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(ScrapeError::Network)
}

// Builds the trending page URL for a window and optional language filter
//
// Examples:
//   (Daily, None)          -> https://github.com/trending?since=daily
//   (Weekly, Some("rust")) -> https://github.com/trending/rust?since=weekly
//
// The language goes into a path segment and is percent-encoded there, so
// names like "f#" come out as "f%23" the way GitHub expects.
pub fn trending_url(period: Period, language: Option<&str>) -> String {
    // BASE_URL is a constant and known to be valid, so .unwrap() is fine here
    let mut url = Url::parse(BASE_URL).unwrap();

    if let Some(language) = language {
        // An https URL always has path segments, so this can't fail
        url.path_segments_mut().unwrap().push(language);
    }

    url.query_pairs_mut().append_pair("since", period.as_query());
    url.into()
}

// Downloads one page and returns its raw markup
//
// Error mapping:
//   connection refused / DNS failure / timeout -> ScrapeError::Network
//   HTTP status outside 2xx                    -> ScrapeError::Fetch(status)
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await.map_err(ScrapeError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Fetch(status));
    }

    response.text().await.map_err(ScrapeError::Network)
}
