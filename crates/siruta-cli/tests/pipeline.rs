//! End-to-end tests for the generation pipeline.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use siruta_cli::pipeline::run_pipeline;
use siruta_model::{SeedRecord, TerritoryLevel, TerritorySource};
use siruta_output::write_seed_file;
use siruta_standards::JURISDICTIONS;
use tempfile::TempDir;

/// A synthetic extract with one local unit per jurisdiction, plus a
/// county-level row and a special-jurisdiction row that must be ignored.
fn full_extract(dir: &Path, extra_rows: &[&str]) -> PathBuf {
    let mut contents = String::from("NIV;SIRUTA;DENLOC;JUD;NUTS;TIP;MED\n");
    contents.push_str("1;10;ALBA;1;;40;\n");
    contents.push_str("2;99901;DIASPORA;999;;;0\n");
    for (jurisdiction, county) in JURISDICTIONS {
        let siruta = 100_000 + jurisdiction * 10;
        contents.push_str(&format!("2;{siruta};UAT {county};{jurisdiction};;1;1\n"));
    }
    for row in extra_rows {
        contents.push_str(row);
        contents.push('\n');
    }
    let path = dir.join("siruta-official.csv");
    fs::write(&path, contents).expect("write extract");
    path
}

fn by_code(records: &[SeedRecord]) -> BTreeMap<String, SeedRecord> {
    records
        .iter()
        .map(|record| (record.territory.code.clone(), record.clone()))
        .collect()
}

#[test]
fn first_run_builds_a_complete_tree() {
    let dir = TempDir::new().expect("temp dir");
    let extract = full_extract(dir.path(), &[]);

    let outcome = run_pipeline(&extract, None).expect("pipeline");

    // 55 static + 42 extract units + 2 overrides
    assert_eq!(outcome.records.len(), 99);
    assert_eq!(outcome.minted, 99);
    assert_eq!(outcome.reused, 0);
    assert_eq!(outcome.dropped, 1);
    assert!(outcome.report.is_empty(), "issues: {:?}", outcome.report.issues);

    // Dense positive ids, maximum equal to the entity count.
    let mut ids: Vec<u32> = outcome.records.iter().map(|record| record.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 99);
    assert_eq!(ids.first().copied(), Some(1));
    assert_eq!(ids.last().copied(), Some(99));

    // Every parent chain reaches the root in depth(level) steps.
    let index = by_code(&outcome.records);
    for record in &outcome.records {
        let mut steps = 0u8;
        let mut cursor = record;
        while let Some(parent_code) = cursor.territory.parent_code.as_deref() {
            cursor = index.get(parent_code).expect("parent resolves");
            steps += 1;
        }
        assert_eq!(cursor.territory.code, "RO");
        assert_eq!(steps, record.territory.level.depth(), "code {}", record.territory.code);
    }
}

#[test]
fn identifiers_survive_a_regeneration_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let extract = full_extract(dir.path(), &[]);

    let first = run_pipeline(&extract, None).expect("first run");
    let prior = dir.path().join("territories.csv");
    write_seed_file(&prior, &first.records).expect("write first run");

    // Second run sees one extra unit in Cluj.
    let extract = full_extract(dir.path(), &["2;55555;COMUNA NOUA;12;;1;0"]);
    let second = run_pipeline(&extract, Some(&prior)).expect("second run");

    assert_eq!(second.records.len(), 100);
    assert_eq!(second.reused, 99);
    assert_eq!(second.minted, 1);

    let first_ids = by_code(&first.records);
    for record in &second.records {
        if let Some(previous) = first_ids.get(&record.territory.code) {
            assert_eq!(record.id, previous.id, "code {}", record.territory.code);
        }
    }
    let fresh = second
        .records
        .iter()
        .find(|record| record.territory.code == "55555")
        .expect("new unit present");
    assert_eq!(fresh.id, 100);
}

#[test]
fn single_row_scenario_matches_the_loader_contract() {
    let dir = TempDir::new().expect("temp dir");
    let contents = "NIV;SIRUTA;DENLOC;JUD;MED\n2;12345;TESTCOMUNA;1;0\n";
    let extract = dir.path().join("siruta-official.csv");
    fs::write(&extract, contents).expect("write extract");

    let outcome = run_pipeline(&extract, None).expect("pipeline");
    let record = outcome
        .records
        .iter()
        .find(|record| record.territory.code == "12345")
        .expect("scenario row present");

    assert_eq!(record.territory.registry_code.as_deref(), Some("12345"));
    assert_eq!(record.territory.level, TerritoryLevel::Lau);
    assert_eq!(record.territory.parent_code.as_deref(), Some("AB"));
    assert_eq!(
        record.territory.urban_flag.map(|flag| flag.as_str()),
        Some("0")
    );
    assert_eq!(record.territory.source, TerritorySource::Registry);
    assert!(record.id >= 1);

    // Only AB, DJ and VL have local units here; the other 39 counties
    // surface as advisory coverage findings.
    assert_eq!(outcome.report.error_count(), 39);
}

#[test]
fn override_units_appear_with_manual_source() {
    let dir = TempDir::new().expect("temp dir");
    let extract = full_extract(dir.path(), &[]);
    let outcome = run_pipeline(&extract, None).expect("pipeline");

    let goranu = outcome
        .records
        .iter()
        .find(|record| record.territory.code == "167589")
        .expect("override present");
    assert_eq!(goranu.territory.source, TerritorySource::ManualOverride);
    assert_eq!(goranu.territory.parent_code.as_deref(), Some("VL"));
}

#[test]
fn missing_extract_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nope.csv");
    assert!(run_pipeline(&missing, None).is_err());
}
