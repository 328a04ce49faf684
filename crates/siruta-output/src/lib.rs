//! Seed CSV writer.
//!
//! The column set and ordering are a contract with the downstream loader;
//! absent optional fields serialize as empty strings.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use siruta_model::SeedRecord;

/// Output columns, in order.
pub const SEED_COLUMNS: [&str; 10] = [
    "id",
    "code",
    "registry_code",
    "level",
    "parent_code",
    "name",
    "nuts_hint",
    "type_hint",
    "urban_flag",
    "source",
];

/// Serialize the seed to any writer.
pub fn write_seed<W: Write>(writer: W, records: &[SeedRecord]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer
        .write_record(SEED_COLUMNS)
        .context("write seed header")?;
    for record in records {
        let territory = &record.territory;
        csv_writer
            .write_record([
                record.id.to_string().as_str(),
                territory.code.as_str(),
                territory.registry_code.as_deref().unwrap_or(""),
                territory.level.as_str(),
                territory.parent_code.as_deref().unwrap_or(""),
                territory.name.as_str(),
                territory.nuts_hint.as_deref().unwrap_or(""),
                territory.type_hint.as_deref().unwrap_or(""),
                territory
                    .urban_flag
                    .map(|flag| flag.as_str())
                    .unwrap_or(""),
                territory.source.as_str(),
            ])
            .with_context(|| format!("write seed row: {}", territory.code))?;
    }
    csv_writer.flush().context("flush seed output")?;
    Ok(())
}

/// Write the seed to a file, creating parent directories as needed.
pub fn write_seed_file(path: &Path, records: &[SeedRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    let file =
        fs::File::create(path).with_context(|| format!("create output: {}", path.display()))?;
    write_seed(file, records)
}
