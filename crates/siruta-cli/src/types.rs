use std::path::PathBuf;

use siruta_model::{TerritoryLevel, ValidationReport};

/// Result of a `generate` run, consumed by the summary printer.
#[derive(Debug)]
pub struct GenerateResult {
    /// Where the seed was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub total: usize,
    /// Entity counts per level, in containment order.
    pub level_counts: Vec<(TerritoryLevel, usize)>,
    /// Identifiers carried over from the prior export.
    pub reused: usize,
    /// Identifiers minted this run.
    pub minted: usize,
    /// Extract rows dropped for unmapped jurisdictions.
    pub dropped: usize,
    pub report: ValidationReport,
}
