// src/export/json.rs
// =============================================================================
// JSON export for trending records.
//
// Output is a pretty-printed top-level array; numeric fields come out as
// JSON numbers because the record derives Serialize with u64 fields.
// serde_json's output is deterministic, so identical input produces
// byte-identical files.
// =============================================================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ScrapeError;
use crate::trending::TrendingRepo;

/// Writes all records to `path` as a pretty-printed JSON array.
pub fn write_json(records: &[TrendingRepo], path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(records)?;

    // File::create truncates, so a rerun overwrites deterministically
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
