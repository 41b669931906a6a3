// src/export/csv.rs
// =============================================================================
// CSV export for trending records.
//
// The format is plain RFC-4180 style:
// - one header row, then one row per record
// - a field is quoted only when it contains a comma, quote, CR or LF
// - embedded quotes are doubled ("" inside a quoted field)
//
// Small enough that a hand writer beats pulling in a CSV dependency.
// =============================================================================

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ScrapeError;
use crate::trending::TrendingRepo;

/// Column order is fixed and matches the record's field order
pub const COLUMNS: [&str; 8] = [
    "name",
    "developer",
    "description",
    "language",
    "stars",
    "forks",
    "stars_today",
    "url",
];

// Writes all records to `path` as CSV, header first
//
// File::create truncates an existing file, so a rerun overwrites
// deterministically instead of appending.
pub fn write_csv(records: &[TrendingRepo], path: &Path) -> Result<(), ScrapeError> {
    let mut writer = BufWriter::new(File::create(path)?);

    write_row(&mut writer, &COLUMNS)?;
    for repo in records {
        let row = record_row(repo);
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        write_row(&mut writer, &row)?;
    }

    writer.flush()?;
    Ok(())
}

// One record as its eight column values, numbers rendered in decimal
fn record_row(repo: &TrendingRepo) -> [String; 8] {
    [
        repo.name.clone(),
        repo.developer.clone(),
        repo.description.clone(),
        repo.language.clone(),
        repo.stars.to_string(),
        repo.forks.to_string(),
        repo.stars_today.to_string(),
        repo.url.clone(),
    ]
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

// Writes a single CSV row to any writer
fn write_row<W: Write>(writer: &mut W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(writer, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(writer, "\"{}\"", escaped)?;
        } else {
            write!(writer, "{}", cell)?;
        }
    }
    writeln!(writer)
}
