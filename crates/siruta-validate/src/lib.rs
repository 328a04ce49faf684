//! Advisory validation of the assembled seed.
//!
//! Checks:
//! - `DUP_CODE`: two entities share a business code → **Error**
//! - `DUP_REGISTRY_CODE`: two entities share a registry code → **Error**
//! - `DANGLING_PARENT`: a parent code resolves to no entity → **Error**
//! - `COUNTY_WITHOUT_UNITS`: a county has no LAU children → **Error**
//!
//! Findings never block writing the output; the operator may want to
//! inspect a partial seed. The CLI can opt into gating its exit code on
//! them.

use std::collections::{BTreeMap, BTreeSet};

use siruta_model::{SeedRecord, TerritoryLevel, ValidationIssue, ValidationReport};
use siruta_standards::COUNTIES;

pub const DUP_CODE: &str = "DUP_CODE";
pub const DUP_REGISTRY_CODE: &str = "DUP_REGISTRY_CODE";
pub const DANGLING_PARENT: &str = "DANGLING_PARENT";
pub const COUNTY_WITHOUT_UNITS: &str = "COUNTY_WITHOUT_UNITS";

/// Run every check over the assembled set and aggregate the findings.
pub fn validate_seed(records: &[SeedRecord]) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut codes = BTreeSet::new();
    let mut registry_codes = BTreeSet::new();
    for record in records {
        if !codes.insert(record.territory.code.as_str()) {
            report.push(ValidationIssue::error(
                DUP_CODE,
                format!("duplicate code: {}", record.territory.code),
            ));
        }
        if let Some(registry_code) = &record.territory.registry_code
            && !registry_codes.insert(registry_code.as_str())
        {
            report.push(ValidationIssue::error(
                DUP_REGISTRY_CODE,
                format!("duplicate registry code: {registry_code}"),
            ));
        }
    }

    let parents: BTreeSet<&str> = records
        .iter()
        .filter_map(|record| record.territory.parent_code.as_deref())
        .collect();
    for parent in parents {
        if !codes.contains(parent) {
            report.push(ValidationIssue::error(
                DANGLING_PARENT,
                format!("unresolved parent code: {parent}"),
            ));
        }
    }

    let mut lau_children: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        if record.territory.level == TerritoryLevel::Lau
            && let Some(parent) = record.territory.parent_code.as_deref()
        {
            *lau_children.entry(parent).or_insert(0) += 1;
        }
    }
    for county in COUNTIES {
        if lau_children.get(county.code).copied().unwrap_or(0) == 0 {
            report.push(ValidationIssue::error(
                COUNTY_WITHOUT_UNITS,
                format!("county {} has no local administrative units", county.code),
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use siruta_model::{Territory, TerritorySource, UrbanFlag};

    fn record(id: u32, code: &str, level: TerritoryLevel, parent: Option<&str>) -> SeedRecord {
        let registry_code = (level == TerritoryLevel::Lau).then(|| code.to_string());
        let urban_flag = (level == TerritoryLevel::Lau).then_some(UrbanFlag::Rural);
        SeedRecord {
            id,
            territory: Territory {
                code: code.to_string(),
                registry_code,
                level,
                parent_code: parent.map(String::from),
                name: code.to_string(),
                nuts_hint: None,
                type_hint: None,
                urban_flag,
                source: TerritorySource::Registry,
            },
        }
    }

    /// One LAU under every county, so coverage findings stay quiet.
    fn full_coverage() -> Vec<SeedRecord> {
        let mut records = vec![record(1, "RO", TerritoryLevel::National, None)];
        for (idx, county) in COUNTIES.iter().enumerate() {
            let id = 100 + idx as u32;
            records.push(record(id, county.code, TerritoryLevel::Nuts3, Some("RO")));
            let lau_code = format!("{}0", 1000 + idx);
            records.push(record(
                1000 + idx as u32,
                &lau_code,
                TerritoryLevel::Lau,
                Some(county.code),
            ));
        }
        records
    }

    #[test]
    fn clean_set_produces_no_findings() {
        let report = validate_seed(&full_coverage());
        assert!(report.is_empty(), "issues: {:?}", report.issues);
    }

    #[test]
    fn detects_duplicate_codes() {
        let mut records = full_coverage();
        records.push(record(9999, "RO", TerritoryLevel::National, None));
        let report = validate_seed(&records);
        assert!(
            report
                .issues
                .iter()
                .any(|issue| issue.code == DUP_CODE && issue.message.contains("RO"))
        );
    }

    #[test]
    fn detects_duplicate_registry_codes() {
        let mut records = full_coverage();
        let original = record(9998, "88888", TerritoryLevel::Lau, Some("AB"));
        let mut dup = record(9999, "88889", TerritoryLevel::Lau, Some("AB"));
        dup.territory.registry_code = Some("88888".to_string());
        records.push(original);
        records.push(dup);
        let report = validate_seed(&records);
        assert!(
            report
                .issues
                .iter()
                .any(|issue| issue.code == DUP_REGISTRY_CODE)
        );
    }

    #[test]
    fn detects_dangling_parent() {
        let mut records = full_coverage();
        records.push(record(9999, "77777", TerritoryLevel::Lau, Some("XX")));
        let report = validate_seed(&records);
        assert!(
            report
                .issues
                .iter()
                .any(|issue| issue.code == DANGLING_PARENT && issue.message.contains("XX"))
        );
    }

    #[test]
    fn detects_county_without_units() {
        let records: Vec<SeedRecord> = full_coverage()
            .into_iter()
            .filter(|record| record.territory.parent_code.as_deref() != Some("CJ"))
            .collect();
        let report = validate_seed(&records);
        assert!(
            report
                .issues
                .iter()
                .any(|issue| issue.code == COUNTY_WITHOUT_UNITS && issue.message.contains("CJ"))
        );
        assert!(report.has_errors());
    }
}
