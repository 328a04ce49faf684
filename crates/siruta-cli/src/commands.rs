use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use siruta_cli::pipeline::run_pipeline;
use siruta_cli::types::GenerateResult;
use siruta_model::TerritoryLevel;
use siruta_output::write_seed_file;
use siruta_standards::{COUNTIES, HierarchyIndex, MACROREGIONS, REGIONS};

use crate::cli::GenerateArgs;
use crate::summary::apply_table_style;

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    if !args.extract.exists() {
        bail!("registry extract not found: {}", args.extract.display());
    }
    let generate_span = info_span!("generate", extract = %args.extract.display());
    let _generate_guard = generate_span.enter();

    let outcome = run_pipeline(&args.extract, args.prior_export.as_deref())?;

    for issue in &outcome.report.issues {
        warn!(check = %issue.code, severity = ?issue.severity, "{}", issue.message);
    }

    let output = if args.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        write_seed_file(&args.output, &outcome.records)?;
        info!(path = %args.output.display(), rows = outcome.records.len(), "wrote territory seed");
        Some(args.output.clone())
    };

    let level_counts = TerritoryLevel::ALL
        .iter()
        .map(|level| {
            let count = outcome
                .records
                .iter()
                .filter(|record| record.territory.level == *level)
                .count();
            (*level, count)
        })
        .collect();

    Ok(GenerateResult {
        output,
        total: outcome.records.len(),
        level_counts,
        reused: outcome.reused,
        minted: outcome.minted,
        dropped: outcome.dropped,
        report: outcome.report,
    })
}

pub fn run_counties() -> Result<()> {
    let index = HierarchyIndex::build()?;
    let mut counties: Vec<_> = COUNTIES.iter().collect();
    counties.sort_by_key(|county| county.code);

    let mut table = Table::new();
    table.set_header(vec!["Code", "Name", "Region", "Macroregion"]);
    apply_table_style(&mut table);
    for county in counties {
        let region_code = index.region_of(county.code)?;
        let region_name = REGIONS
            .iter()
            .find(|region| region.code == region_code)
            .map(|region| region.name)
            .unwrap_or_default();
        let macroregion = index
            .macroregion_of(region_code)
            .and_then(|code| MACROREGIONS.iter().find(|m| m.code == code))
            .map(|m| m.name)
            .unwrap_or_default();
        table.add_row(vec![
            county.code,
            county.name,
            region_name,
            macroregion,
        ]);
    }
    println!("{table}");
    Ok(())
}
