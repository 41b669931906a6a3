// src/export/mod.rs
// =============================================================================
// This module serializes extracted records to a file.
//
// Submodules:
// - csv: Hand-rolled CSV writer (header + quoting rules)
// - json: serde_json array export
//
// Both writers open the destination with create/truncate, so exporting the
// same records to the same path twice produces byte-identical output - no
// append semantics anywhere.
// =============================================================================

mod csv;
mod json;

pub use csv::write_csv;
pub use json::write_json;

use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::ScrapeError;
use crate::trending::TrendingRepo;

/// Writes `records` to `path` in the requested format.
pub fn export(
    records: &[TrendingRepo],
    path: &Path,
    format: OutputFormat,
) -> Result<(), ScrapeError> {
    match format {
        OutputFormat::Csv => write_csv(records, path),
        OutputFormat::Json => write_json(records, path),
    }
}
