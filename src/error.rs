// src/error.rs
// =============================================================================
// Error taxonomy for the scraping pipeline.
//
// Every failure surfaces to the immediate caller - there is no retry,
// recovery, or partial-result salvage anywhere in the pipeline. Per-field
// parsing anomalies (missing star count, missing description, ...) are NOT
// errors; those degrade to default values inside the extractor.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The connection could not be established or timed out.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// GitHub answered, but with a non-success status code.
    /// (GitHub may reject default client signatures - see the User-Agent
    /// header in the fetcher.)
    #[error("GitHub returned HTTP {0}")]
    Fetch(StatusCode),

    /// The page parsed, but no repository listing blocks were found.
    /// Almost always means the upstream page layout changed.
    #[error("no repository listings found - the trending page layout may have changed")]
    Extraction,

    /// The export destination could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Records could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
