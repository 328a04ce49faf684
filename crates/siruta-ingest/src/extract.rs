//! Registry extract parser: filter to LAU rows and normalize them.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use siruta_model::UrbanFlag;
use siruta_standards::HierarchyIndex;

use crate::csv_utils::{get_field, get_optional, read_delimited_rows};

/// The registry extract uses semicolons, unlike the seed files.
pub const EXTRACT_DELIMITER: u8 = b';';

/// Level indicator column; `"2"` marks local administrative units.
pub const LEVEL_COLUMN: &str = "NIV";
pub const LAU_LEVEL: &str = "2";
pub const REGISTRY_CODE_COLUMN: &str = "SIRUTA";
pub const NAME_COLUMN: &str = "DENLOC";
pub const JURISDICTION_COLUMN: &str = "JUD";
pub const NUTS_COLUMN: &str = "NUTS";
pub const TYPE_COLUMN: &str = "TIP";
pub const URBAN_COLUMN: &str = "MED";

/// One local administrative unit parsed from the registry extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UatRecord {
    pub registry_code: String,
    pub name: String,
    /// County code resolved from the numeric jurisdiction field.
    pub county_code: String,
    pub nuts_hint: Option<String>,
    pub type_hint: Option<String>,
    pub urban: UrbanFlag,
}

/// Parse result: the retained records plus the number of rows dropped
/// because their jurisdiction code falls outside the modeled scope.
#[derive(Debug, Clone, Default)]
pub struct ParsedExtract {
    pub records: Vec<UatRecord>,
    pub dropped: usize,
}

/// Read the registry extract and keep only LAU-level rows.
///
/// Rows with an unrecognized or non-numeric jurisdiction code are dropped
/// with a warning; extracts routinely contain special codes (diaspora,
/// abroad) outside the modeled counties.
pub fn parse_registry_extract(path: &Path, index: &HierarchyIndex) -> Result<ParsedExtract> {
    let table = read_delimited_rows(path, EXTRACT_DELIMITER)?;
    table.require_columns(&[
        LEVEL_COLUMN,
        REGISTRY_CODE_COLUMN,
        NAME_COLUMN,
        JURISDICTION_COLUMN,
    ])?;

    let mut parsed = ParsedExtract::default();
    for row in &table.rows {
        if get_field(row, LEVEL_COLUMN) != LAU_LEVEL {
            continue;
        }
        let registry_code = get_field(row, REGISTRY_CODE_COLUMN);
        let name = get_field(row, NAME_COLUMN);
        if registry_code.is_empty() {
            warn!(name = %name, "extract row without a registry code, skipping");
            parsed.dropped += 1;
            continue;
        }
        let raw_jurisdiction = get_field(row, JURISDICTION_COLUMN);
        let Ok(jurisdiction) = raw_jurisdiction.parse::<u32>() else {
            warn!(
                registry_code = %registry_code,
                jurisdiction = %raw_jurisdiction,
                "extract row with non-numeric jurisdiction, skipping"
            );
            parsed.dropped += 1;
            continue;
        };
        let Some(county_code) = index.resolve_jurisdiction(jurisdiction) else {
            warn!(
                registry_code = %registry_code,
                name = %name,
                jurisdiction,
                "unknown jurisdiction code, skipping"
            );
            parsed.dropped += 1;
            continue;
        };

        parsed.records.push(UatRecord {
            registry_code,
            name,
            county_code: county_code.to_string(),
            nuts_hint: get_optional(row, NUTS_COLUMN),
            type_hint: get_optional(row, TYPE_COLUMN),
            urban: UrbanFlag::from_indicator(&get_field(row, URBAN_COLUMN)),
        });
    }
    info!(
        count = parsed.records.len(),
        dropped = parsed.dropped,
        "parsed local units from registry extract"
    );
    Ok(parsed)
}
