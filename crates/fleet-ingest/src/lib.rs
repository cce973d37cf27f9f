//! CSV ingestion into raw row tables.
//!
//! The derivation engine consumes position-addressed rows with the header
//! kept at index 0, so the reader is configured without header handling
//! and with flexible record lengths (production sheets routinely carry
//! ragged rows; the engine skips rows that are too short).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use fleet_model::RawTable;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Load a CSV file as a raw table, header row preserved at index 0.
pub fn load_table(path: &Path) -> Result<RawTable> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let table = read_table(file)
        .with_context(|| format!("failed to read CSV from {}", path.display()))?;
    debug!(path = %path.display(), rows = table.rows.len(), "loaded csv table");
    Ok(table)
}

/// Read a raw table from any reader; exposed separately for tests.
pub fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("malformed CSV record")?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    Ok(RawTable::new(rows))
}
