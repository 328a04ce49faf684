//! Identifier registry loader: lookup tables from a prior seed export.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::csv_utils::{get_field, get_optional, read_delimited_rows};

/// Column carrying the surrogate identifier in the prior export.
pub const ID_COLUMN: &str = "id";
/// Column carrying the business code in the prior export.
pub const CODE_COLUMN: &str = "code";
/// Column carrying the registry code in the prior export.
pub const REGISTRY_CODE_COLUMN: &str = "registry_code";

/// Identifier lookup tables built from a previously exported seed.
///
/// Both maps are empty on a first run. The registry-code map is consulted
/// before the code map during assignment: registry codes are the
/// authoritative statistical identifier, while business codes can in
/// principle be reassigned upstream.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    pub code_ids: BTreeMap<String, u32>,
    pub registry_code_ids: BTreeMap<String, u32>,
}

impl IdRegistry {
    /// Largest identifier seen across both maps; 0 when empty.
    pub fn max_id(&self) -> u32 {
        let codes = self.code_ids.values().copied().max().unwrap_or(0);
        let registry = self.registry_code_ids.values().copied().max().unwrap_or(0);
        codes.max(registry)
    }

    pub fn len(&self) -> usize {
        self.code_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_ids.is_empty() && self.registry_code_ids.is_empty()
    }
}

/// Load identifier mappings from a prior export, if one exists.
///
/// A missing file is the first-run case, not a failure: the pipeline
/// proceeds with empty maps and mints every identifier fresh. Rows whose
/// id does not parse are skipped with a warning.
pub fn load_id_registry(path: &Path) -> Result<IdRegistry> {
    if !path.exists() {
        warn!(path = %path.display(), "prior export not found, minting fresh identifiers");
        return Ok(IdRegistry::default());
    }

    let table = read_delimited_rows(path, b',')?;
    let mut registry = IdRegistry::default();
    for row in &table.rows {
        let code = get_field(row, CODE_COLUMN);
        if code.is_empty() {
            warn!("prior export row without a code, skipping");
            continue;
        }
        let raw_id = get_field(row, ID_COLUMN);
        let Ok(id) = raw_id.parse::<u32>() else {
            warn!(code = %code, id = %raw_id, "prior export row with unparseable id, skipping");
            continue;
        };
        registry.code_ids.insert(code, id);
        if let Some(registry_code) = get_optional(row, REGISTRY_CODE_COLUMN) {
            registry.registry_code_ids.insert(registry_code, id);
        }
    }
    info!(count = registry.len(), "loaded existing territory identifiers");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_id_spans_both_maps() {
        let mut registry = IdRegistry::default();
        registry.code_ids.insert("RO".to_string(), 3);
        registry.registry_code_ids.insert("12345".to_string(), 9);
        assert_eq!(registry.max_id(), 9);
    }

    #[test]
    fn empty_registry_has_zero_max() {
        assert_eq!(IdRegistry::default().max_id(), 0);
    }
}
