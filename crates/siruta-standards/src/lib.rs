//! Embedded reference data for the territory seed: the fixed NUTS
//! hierarchy, the jurisdiction map, and the manual LAU override list.

pub mod builder;
pub mod error;
pub mod hierarchy;
pub mod tables;

pub use builder::build_static_territories;
pub use error::StandardsError;
pub use hierarchy::HierarchyIndex;
pub use tables::{
    COUNTIES, COUNTY_TYPE_HINT, CountyDef, JURISDICTIONS, LAU_OVERRIDES, LauOverrideDef,
    MACROREGIONS, MacroregionDef, NATIONAL_CODE, NATIONAL_NAME, REGIONS, RegionDef,
};
