pub mod report;
pub mod territory;

pub use report::{IssueSeverity, ValidationIssue, ValidationReport};
pub use territory::{SeedRecord, Territory, TerritoryLevel, TerritorySource, UrbanFlag};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn level_order_matches_depth() {
        let mut depths: Vec<u8> = TerritoryLevel::ALL.iter().map(|l| l.depth()).collect();
        depths.sort_unstable();
        assert_eq!(depths, vec![0, 1, 2, 3, 4]);
        assert!(TerritoryLevel::National < TerritoryLevel::Lau);
        assert!(TerritoryLevel::Nuts2 < TerritoryLevel::Nuts3);
    }

    #[test]
    fn level_round_trips_through_str() {
        for level in TerritoryLevel::ALL {
            let parsed = TerritoryLevel::from_str(level.as_str()).expect("parse level");
            assert_eq!(parsed, level);
        }
        assert!(TerritoryLevel::from_str("COUNTY").is_err());
    }

    #[test]
    fn urban_flag_collapses_to_binary() {
        assert_eq!(UrbanFlag::from_indicator("1"), UrbanFlag::Urban);
        assert_eq!(UrbanFlag::from_indicator("0"), UrbanFlag::Rural);
        assert_eq!(UrbanFlag::from_indicator("3"), UrbanFlag::Rural);
        assert_eq!(UrbanFlag::from_indicator(""), UrbanFlag::Rural);
    }

    #[test]
    fn source_serializes_screaming_snake() {
        let json = serde_json::to_string(&TerritorySource::ManualOverride).expect("serialize");
        assert_eq!(json, "\"MANUAL_OVERRIDE\"");
        assert_eq!(TerritorySource::ManualOverride.as_str(), "MANUAL_OVERRIDE");
    }

    #[test]
    fn report_counts_by_severity() {
        let mut report = ValidationReport::default();
        report.push(ValidationIssue::error("DUP_CODE", "duplicate code: AB"));
        report.push(ValidationIssue::warning("EMPTY_NAME", "empty name: 123"));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
        assert!(!report.is_empty());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = SeedRecord {
            id: 7,
            territory: Territory {
                code: "12345".to_string(),
                registry_code: Some("12345".to_string()),
                level: TerritoryLevel::Lau,
                parent_code: Some("AB".to_string()),
                name: "TESTCOMUNA".to_string(),
                nuts_hint: None,
                type_hint: None,
                urban_flag: Some(UrbanFlag::Rural),
                source: TerritorySource::Registry,
            },
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: SeedRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
