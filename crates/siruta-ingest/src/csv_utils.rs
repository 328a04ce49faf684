//! Shared CSV utilities for reading the delimited inputs.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// A delimited file read into memory: its header row and one map per
/// data row, keyed by column header.
#[derive(Debug, Clone)]
pub struct DelimitedTable {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl DelimitedTable {
    /// Verify that every required column is present in the header row.
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        for column in required {
            if !self.headers.iter().any(|header| header == column) {
                anyhow::bail!("missing required column: {column}");
            }
        }
        Ok(())
    }
}

/// Read a delimited file into a vector of row maps.
///
/// Handles BOM characters and trims whitespace from headers and values.
pub fn read_delimited_rows(path: &Path, delimiter: u8) -> Result<DelimitedTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(DelimitedTable { headers, rows })
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Get an optional field value from a row (None if empty or missing).
pub fn get_optional(row: &BTreeMap<String, String>, key: &str) -> Option<String> {
    row.get(key).filter(|value| !value.is_empty()).cloned()
}
