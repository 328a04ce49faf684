#![deny(unsafe_code)]

/// Inconsistencies in the embedded reference tables.
///
/// These indicate the generator's own constants are wrong, not a runtime
/// condition: the process should stop before producing any output.
#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("county {code} is not contained by any region")]
    UnmappedCounty { code: String },

    #[error("region {region} lists undefined county {code}")]
    UndefinedCounty { region: String, code: String },

    #[error("region {code} references undefined macroregion {macroregion}")]
    UndefinedMacroregion { code: String, macroregion: String },

    #[error("county {code} appears in more than one region")]
    DuplicateContainment { code: String },

    #[error("jurisdiction {jurisdiction} maps to undefined county {code}")]
    UnknownJurisdictionTarget { jurisdiction: u32, code: String },

    #[error("override {registry_code} references undefined county {county}")]
    UnknownOverrideCounty {
        registry_code: String,
        county: String,
    },
}
