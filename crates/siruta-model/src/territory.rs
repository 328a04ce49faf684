use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hierarchy level of a territory, from the national root down to local
/// administrative units. Variant order matches containment depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerritoryLevel {
    /// The single national root (`RO`).
    National,
    /// Macroregions (`RO1`..`RO4`).
    Nuts1,
    /// Development regions (`RO11`..`RO42`).
    Nuts2,
    /// Counties, including the capital municipality.
    Nuts3,
    /// Local administrative units (cities, communes).
    Lau,
}

impl TerritoryLevel {
    /// All levels in containment order.
    pub const ALL: [TerritoryLevel; 5] = [
        TerritoryLevel::National,
        TerritoryLevel::Nuts1,
        TerritoryLevel::Nuts2,
        TerritoryLevel::Nuts3,
        TerritoryLevel::Lau,
    ];

    /// Number of parent links between this level and the national root.
    pub fn depth(&self) -> u8 {
        match self {
            TerritoryLevel::National => 0,
            TerritoryLevel::Nuts1 => 1,
            TerritoryLevel::Nuts2 => 2,
            TerritoryLevel::Nuts3 => 3,
            TerritoryLevel::Lau => 4,
        }
    }

    /// Canonical name as written in the seed file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerritoryLevel::National => "NATIONAL",
            TerritoryLevel::Nuts1 => "NUTS1",
            TerritoryLevel::Nuts2 => "NUTS2",
            TerritoryLevel::Nuts3 => "NUTS3",
            TerritoryLevel::Lau => "LAU",
        }
    }
}

impl fmt::Display for TerritoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TerritoryLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NATIONAL" => Ok(TerritoryLevel::National),
            "NUTS1" => Ok(TerritoryLevel::Nuts1),
            "NUTS2" => Ok(TerritoryLevel::Nuts2),
            "NUTS3" => Ok(TerritoryLevel::Nuts3),
            "LAU" => Ok(TerritoryLevel::Lau),
            other => Err(format!("unknown territory level: {other}")),
        }
    }
}

/// Provenance of a territory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerritorySource {
    /// Fixed NUTS hierarchy embedded in the generator.
    Static,
    /// Parsed from the official registry extract.
    Registry,
    /// Known units missing from the extract, merged from the override list.
    ManualOverride,
}

impl TerritorySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerritorySource::Static => "STATIC",
            TerritorySource::Registry => "REGISTRY",
            TerritorySource::ManualOverride => "MANUAL_OVERRIDE",
        }
    }
}

impl fmt::Display for TerritorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urban/rural indicator for local administrative units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrbanFlag {
    Urban,
    Rural,
}

impl UrbanFlag {
    /// Collapse the registry's environment indicator to the binary flag.
    /// Only the urban sentinel `"1"` maps to urban; everything else is rural.
    pub fn from_indicator(value: &str) -> UrbanFlag {
        if value.trim() == "1" {
            UrbanFlag::Urban
        } else {
            UrbanFlag::Rural
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrbanFlag::Urban => "1",
            UrbanFlag::Rural => "0",
        }
    }
}

/// One entity of the territory reference table, before identifier assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Primary external business key: NUTS-style code for non-leaf levels,
    /// registry numeric code for LAU rows. Unique across the set.
    pub code: String,
    /// Official registry code; present only on LAU rows.
    pub registry_code: Option<String>,
    pub level: TerritoryLevel,
    /// Code of the containing territory; `None` only for the national root.
    pub parent_code: Option<String>,
    pub name: String,
    /// NUTS hint passed through from the registry, when present.
    pub nuts_hint: Option<String>,
    /// Registry type hint; counties carry the fixed county type code.
    pub type_hint: Option<String>,
    pub urban_flag: Option<UrbanFlag>,
    pub source: TerritorySource,
}

/// A territory with its assigned stable surrogate identifier.
///
/// Identifiers survive regeneration: as long as a `code` (or its
/// `registry_code`) appears in the prior export, the same id is reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub id: u32,
    pub territory: Territory,
}
