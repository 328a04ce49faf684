use std::collections::BTreeMap;

use crate::error::StandardsError;
use crate::tables::{COUNTIES, JURISDICTIONS, LAU_OVERRIDES, MACROREGIONS, REGIONS};

/// Precomputed reverse lookups over the embedded containment tables.
///
/// The tables express containment top-down (a region lists its counties);
/// hierarchy construction needs the other direction, so the maps are built
/// once at startup. Building the index also cross-checks the tables: every
/// county must be claimed by exactly one region, every region must name a
/// defined macroregion, and every jurisdiction/override target must be a
/// defined county.
#[derive(Debug, Clone)]
pub struct HierarchyIndex {
    county_to_region: BTreeMap<&'static str, &'static str>,
    region_to_macroregion: BTreeMap<&'static str, &'static str>,
    jurisdiction_to_county: BTreeMap<u32, &'static str>,
}

impl HierarchyIndex {
    pub fn build() -> Result<Self, StandardsError> {
        let mut region_to_macroregion = BTreeMap::new();
        for region in REGIONS {
            if !MACROREGIONS.iter().any(|m| m.code == region.macroregion) {
                return Err(StandardsError::UndefinedMacroregion {
                    code: region.code.to_string(),
                    macroregion: region.macroregion.to_string(),
                });
            }
            region_to_macroregion.insert(region.code, region.macroregion);
        }

        let mut county_to_region = BTreeMap::new();
        for region in REGIONS {
            for county in region.counties {
                if !COUNTIES.iter().any(|c| c.code == *county) {
                    return Err(StandardsError::UndefinedCounty {
                        region: region.code.to_string(),
                        code: (*county).to_string(),
                    });
                }
                if county_to_region.insert(*county, region.code).is_some() {
                    return Err(StandardsError::DuplicateContainment {
                        code: (*county).to_string(),
                    });
                }
            }
        }
        for county in COUNTIES {
            if !county_to_region.contains_key(county.code) {
                return Err(StandardsError::UnmappedCounty {
                    code: county.code.to_string(),
                });
            }
        }

        let mut jurisdiction_to_county = BTreeMap::new();
        for (jurisdiction, county) in JURISDICTIONS {
            if !county_to_region.contains_key(county) {
                return Err(StandardsError::UnknownJurisdictionTarget {
                    jurisdiction: *jurisdiction,
                    code: (*county).to_string(),
                });
            }
            jurisdiction_to_county.insert(*jurisdiction, *county);
        }

        for over in LAU_OVERRIDES {
            if !county_to_region.contains_key(over.county) {
                return Err(StandardsError::UnknownOverrideCounty {
                    registry_code: over.registry_code.to_string(),
                    county: over.county.to_string(),
                });
            }
        }

        Ok(Self {
            county_to_region,
            region_to_macroregion,
            jurisdiction_to_county,
        })
    }

    /// NUTS2 region containing the given county.
    pub fn region_of(&self, county: &str) -> Result<&'static str, StandardsError> {
        self.county_to_region
            .get(county)
            .copied()
            .ok_or_else(|| StandardsError::UnmappedCounty {
                code: county.to_string(),
            })
    }

    /// NUTS1 macroregion containing the given region.
    pub fn macroregion_of(&self, region: &str) -> Option<&'static str> {
        self.region_to_macroregion.get(region).copied()
    }

    /// County code for a numeric jurisdiction code from the registry
    /// extract. `None` for codes outside the modeled scope (diaspora and
    /// other special codes).
    pub fn resolve_jurisdiction(&self, jurisdiction: u32) -> Option<&'static str> {
        self.jurisdiction_to_county.get(&jurisdiction).copied()
    }
}
