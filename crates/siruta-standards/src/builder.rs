//! Static hierarchy construction: the fixed NUTS levels of the seed.

use siruta_model::{Territory, TerritoryLevel, TerritorySource};

use crate::error::StandardsError;
use crate::hierarchy::HierarchyIndex;
use crate::tables::{COUNTIES, COUNTY_TYPE_HINT, MACROREGIONS, NATIONAL_CODE, NATIONAL_NAME, REGIONS};

/// Emit the fixed-identity territories: 1 national root, 4 macroregions,
/// 8 regions, and 42 counties, in that order.
///
/// Parent linkage for counties goes through the reverse containment lookup;
/// an unmapped county here means the embedded tables are inconsistent.
pub fn build_static_territories(index: &HierarchyIndex) -> Result<Vec<Territory>, StandardsError> {
    let mut territories = Vec::with_capacity(1 + MACROREGIONS.len() + REGIONS.len() + COUNTIES.len());

    territories.push(Territory {
        code: NATIONAL_CODE.to_string(),
        registry_code: None,
        level: TerritoryLevel::National,
        parent_code: None,
        name: NATIONAL_NAME.to_string(),
        nuts_hint: None,
        type_hint: None,
        urban_flag: None,
        source: TerritorySource::Static,
    });

    for macroregion in MACROREGIONS {
        territories.push(Territory {
            code: macroregion.code.to_string(),
            registry_code: None,
            level: TerritoryLevel::Nuts1,
            parent_code: Some(NATIONAL_CODE.to_string()),
            name: macroregion.name.to_string(),
            nuts_hint: None,
            type_hint: None,
            urban_flag: None,
            source: TerritorySource::Static,
        });
    }

    for region in REGIONS {
        territories.push(Territory {
            code: region.code.to_string(),
            registry_code: None,
            level: TerritoryLevel::Nuts2,
            parent_code: Some(region.macroregion.to_string()),
            name: region.name.to_string(),
            nuts_hint: None,
            type_hint: None,
            urban_flag: None,
            source: TerritorySource::Static,
        });
    }

    for county in COUNTIES {
        let region = index.region_of(county.code)?;
        territories.push(Territory {
            code: county.code.to_string(),
            registry_code: None,
            level: TerritoryLevel::Nuts3,
            parent_code: Some(region.to_string()),
            name: county.name.to_string(),
            nuts_hint: None,
            type_hint: Some(COUNTY_TYPE_HINT.to_string()),
            urban_flag: None,
            source: TerritorySource::Static,
        });
    }

    Ok(territories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_fifty_five_fixed_territories() {
        let index = HierarchyIndex::build().unwrap();
        let territories = build_static_territories(&index).unwrap();
        assert_eq!(territories.len(), 55);

        let count_at = |level: TerritoryLevel| {
            territories.iter().filter(|t| t.level == level).count()
        };
        assert_eq!(count_at(TerritoryLevel::National), 1);
        assert_eq!(count_at(TerritoryLevel::Nuts1), 4);
        assert_eq!(count_at(TerritoryLevel::Nuts2), 8);
        assert_eq!(count_at(TerritoryLevel::Nuts3), 42);
    }

    #[test]
    fn only_the_root_lacks_a_parent() {
        let index = HierarchyIndex::build().unwrap();
        let territories = build_static_territories(&index).unwrap();
        for territory in &territories {
            if territory.level == TerritoryLevel::National {
                assert!(territory.parent_code.is_none());
            } else {
                assert!(territory.parent_code.is_some(), "code {}", territory.code);
            }
        }
    }

    #[test]
    fn county_rows_carry_type_and_region_parent() {
        let index = HierarchyIndex::build().unwrap();
        let territories = build_static_territories(&index).unwrap();
        let cluj = territories
            .iter()
            .find(|t| t.code == "CJ")
            .expect("county CJ present");
        assert_eq!(cluj.level, TerritoryLevel::Nuts3);
        assert_eq!(cluj.parent_code.as_deref(), Some("RO11"));
        assert_eq!(cluj.type_hint.as_deref(), Some(COUNTY_TYPE_HINT));
        assert_eq!(cluj.name, "Cluj");
        assert!(cluj.registry_code.is_none());
    }

    #[test]
    fn all_static_rows_are_marked_static() {
        let index = HierarchyIndex::build().unwrap();
        let territories = build_static_territories(&index).unwrap();
        assert!(
            territories
                .iter()
                .all(|t| t.source == TerritorySource::Static)
        );
    }
}
