//! Embedded reference tables for the Romanian administrative hierarchy.
//!
//! These are fixed-identity data: the NUTS hierarchy changes only through
//! legislation, so the tables live in the binary rather than in input files.
//! [`crate::HierarchyIndex::build`] cross-checks them at startup and refuses
//! to run if they disagree with each other.

/// Code of the national root territory.
pub const NATIONAL_CODE: &str = "RO";

/// Display name of the national root, as used by the statistics institute.
pub const NATIONAL_NAME: &str = "TOTAL";

/// Registry type code carried by county rows.
pub const COUNTY_TYPE_HINT: &str = "40";

/// A NUTS1 macroregion. All macroregions hang off the national root.
#[derive(Debug, Clone, Copy)]
pub struct MacroregionDef {
    pub code: &'static str,
    pub name: &'static str,
}

/// A NUTS2 development region with its containing macroregion and the
/// counties it contains.
#[derive(Debug, Clone, Copy)]
pub struct RegionDef {
    pub code: &'static str,
    pub name: &'static str,
    pub macroregion: &'static str,
    pub counties: &'static [&'static str],
}

/// A NUTS3 county (or county-equivalent, for the capital municipality).
#[derive(Debug, Clone, Copy)]
pub struct CountyDef {
    pub code: &'static str,
    pub name: &'static str,
}

/// A local administrative unit known to be missing from the official
/// registry extract but still tracked by the statistics institute.
#[derive(Debug, Clone, Copy)]
pub struct LauOverrideDef {
    pub registry_code: &'static str,
    pub name: &'static str,
    pub county: &'static str,
}

pub const MACROREGIONS: &[MacroregionDef] = &[
    MacroregionDef { code: "RO1", name: "MACROREGIUNEA UNU" },
    MacroregionDef { code: "RO2", name: "MACROREGIUNEA DOI" },
    MacroregionDef { code: "RO3", name: "MACROREGIUNEA TREI" },
    MacroregionDef { code: "RO4", name: "MACROREGIUNEA PATRU" },
];

pub const REGIONS: &[RegionDef] = &[
    RegionDef {
        code: "RO11",
        name: "Nord-Vest",
        macroregion: "RO1",
        counties: &["BH", "BN", "CJ", "MM", "SJ", "SM"],
    },
    RegionDef {
        code: "RO12",
        name: "Centru",
        macroregion: "RO1",
        counties: &["AB", "BV", "CV", "HR", "MS", "SB"],
    },
    RegionDef {
        code: "RO21",
        name: "Nord-Est",
        macroregion: "RO2",
        counties: &["BC", "BT", "IS", "NT", "SV", "VS"],
    },
    RegionDef {
        code: "RO22",
        name: "Sud-Est",
        macroregion: "RO2",
        counties: &["BR", "BZ", "CT", "GL", "TL", "VN"],
    },
    RegionDef {
        code: "RO31",
        name: "Sud - Muntenia",
        macroregion: "RO3",
        counties: &["AG", "CL", "DB", "GR", "IL", "PH", "TR"],
    },
    RegionDef {
        code: "RO32",
        name: "București - Ilfov",
        macroregion: "RO3",
        counties: &["B", "IF"],
    },
    RegionDef {
        code: "RO41",
        name: "Sud-Vest Oltenia",
        macroregion: "RO4",
        counties: &["DJ", "GJ", "MH", "OT", "VL"],
    },
    RegionDef {
        code: "RO42",
        name: "Vest",
        macroregion: "RO4",
        counties: &["AR", "CS", "HD", "TM"],
    },
];

pub const COUNTIES: &[CountyDef] = &[
    CountyDef { code: "AB", name: "Alba" },
    CountyDef { code: "AR", name: "Arad" },
    CountyDef { code: "AG", name: "Argeș" },
    CountyDef { code: "BC", name: "Bacău" },
    CountyDef { code: "BH", name: "Bihor" },
    CountyDef { code: "BN", name: "Bistrița-Năsăud" },
    CountyDef { code: "BT", name: "Botoșani" },
    CountyDef { code: "BV", name: "Brașov" },
    CountyDef { code: "BR", name: "Brăila" },
    CountyDef { code: "B", name: "București" },
    CountyDef { code: "BZ", name: "Buzău" },
    CountyDef { code: "CS", name: "Caraș-Severin" },
    CountyDef { code: "CL", name: "Călărași" },
    CountyDef { code: "CJ", name: "Cluj" },
    CountyDef { code: "CT", name: "Constanța" },
    CountyDef { code: "CV", name: "Covasna" },
    CountyDef { code: "DB", name: "Dâmbovița" },
    CountyDef { code: "DJ", name: "Dolj" },
    CountyDef { code: "GL", name: "Galați" },
    CountyDef { code: "GR", name: "Giurgiu" },
    CountyDef { code: "GJ", name: "Gorj" },
    CountyDef { code: "HR", name: "Harghita" },
    CountyDef { code: "HD", name: "Hunedoara" },
    CountyDef { code: "IL", name: "Ialomița" },
    CountyDef { code: "IS", name: "Iași" },
    CountyDef { code: "IF", name: "Ilfov" },
    CountyDef { code: "MM", name: "Maramureș" },
    CountyDef { code: "MH", name: "Mehedinți" },
    CountyDef { code: "MS", name: "Mureș" },
    CountyDef { code: "NT", name: "Neamț" },
    CountyDef { code: "OT", name: "Olt" },
    CountyDef { code: "PH", name: "Prahova" },
    CountyDef { code: "SM", name: "Satu Mare" },
    CountyDef { code: "SJ", name: "Sălaj" },
    CountyDef { code: "SB", name: "Sibiu" },
    CountyDef { code: "SV", name: "Suceava" },
    CountyDef { code: "TR", name: "Teleorman" },
    CountyDef { code: "TM", name: "Timiș" },
    CountyDef { code: "TL", name: "Tulcea" },
    CountyDef { code: "VS", name: "Vaslui" },
    CountyDef { code: "VL", name: "Vâlcea" },
    CountyDef { code: "VN", name: "Vrancea" },
];

/// Numeric jurisdiction code (the extract's `JUD` column) to county code.
///
/// Codes 41..=50 are reserved/unused in the registry; 51 and 52 were added
/// for Călărași and Giurgiu after the 1981 reorganization.
pub const JURISDICTIONS: &[(u32, &str)] = &[
    (1, "AB"),
    (2, "AR"),
    (3, "AG"),
    (4, "BC"),
    (5, "BH"),
    (6, "BN"),
    (7, "BT"),
    (8, "BV"),
    (9, "BR"),
    (10, "BZ"),
    (11, "CS"),
    (12, "CJ"),
    (13, "CT"),
    (14, "CV"),
    (15, "DB"),
    (16, "DJ"),
    (17, "GL"),
    (18, "GJ"),
    (19, "HR"),
    (20, "HD"),
    (21, "IL"),
    (22, "IS"),
    (23, "IF"),
    (24, "MM"),
    (25, "MH"),
    (26, "MS"),
    (27, "NT"),
    (28, "OT"),
    (29, "PH"),
    (30, "SM"),
    (31, "SJ"),
    (32, "SB"),
    (33, "SV"),
    (34, "TR"),
    (35, "TM"),
    (36, "TL"),
    (37, "VS"),
    (38, "VL"),
    (39, "VN"),
    (40, "B"),
    (51, "CL"),
    (52, "GR"),
];

/// Villages the statistics institute tracks as LAUs even though the
/// official registry extract omits them.
pub const LAU_OVERRIDES: &[LauOverrideDef] = &[
    LauOverrideDef {
        registry_code: "70049",
        name: "CERNELE",
        county: "DJ",
    },
    LauOverrideDef {
        registry_code: "167589",
        name: "GORANU",
        county: "VL",
    },
];
