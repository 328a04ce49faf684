//! Seed generation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Standards**: build the hierarchy index from the embedded tables
//! 2. **Ingest**: load the prior export and parse the registry extract
//! 3. **Assemble**: merge static rows, extract rows, and overrides; assign ids
//! 4. **Validate**: run the advisory checks over the assembled set
//!
//! Writing the output is left to the caller so a dry run can stop after
//! validation.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use siruta_ingest::{IdRegistry, ParsedExtract, load_id_registry, parse_registry_extract};
use siruta_model::{SeedRecord, ValidationReport};
use siruta_standards::{HierarchyIndex, build_static_territories};
use siruta_transform::{AssembledSeed, assemble_seed};
use siruta_validate::validate_seed;

/// Everything the pipeline produces, before output is written.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The assembled seed, ordered by level depth then code.
    pub records: Vec<SeedRecord>,
    pub report: ValidationReport,
    /// Identifiers carried over from the prior export.
    pub reused: usize,
    /// Identifiers minted this run.
    pub minted: usize,
    /// Extract rows dropped for unmapped jurisdictions.
    pub dropped: usize,
}

/// Run the full pipeline against a registry extract and an optional prior
/// export.
///
/// The extract must exist; a missing prior export is the first-run case
/// and yields empty identifier maps.
pub fn run_pipeline(extract: &Path, prior_export: Option<&Path>) -> Result<PipelineOutcome> {
    let started = Instant::now();

    let standards_span = info_span!("standards");
    let index = standards_span
        .in_scope(HierarchyIndex::build)
        .context("embedded reference tables are inconsistent")?;

    let ingest_span = info_span!("ingest", extract = %extract.display());
    let (registry, parsed) = ingest_span.in_scope(
        || -> Result<(IdRegistry, ParsedExtract)> {
            let registry = match prior_export {
                Some(path) => load_id_registry(path)
                    .with_context(|| format!("load prior export: {}", path.display()))?,
                None => IdRegistry::default(),
            };
            let parsed = parse_registry_extract(extract, &index)
                .with_context(|| format!("parse registry extract: {}", extract.display()))?;
            Ok((registry, parsed))
        },
    )?;
    let ParsedExtract { records: uats, dropped } = parsed;

    let assemble_span = info_span!("assemble");
    let seed = assemble_span.in_scope(|| -> Result<AssembledSeed> {
        let static_territories =
            build_static_territories(&index).context("build static hierarchy")?;
        Ok(assemble_seed(static_territories, uats, registry))
    })?;

    let validate_span = info_span!("validate");
    let report = validate_span.in_scope(|| validate_seed(&seed.records));

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        total = seed.records.len(),
        "pipeline finished"
    );
    Ok(PipelineOutcome {
        records: seed.records,
        report,
        reused: seed.reused,
        minted: seed.minted,
        dropped,
    })
}
