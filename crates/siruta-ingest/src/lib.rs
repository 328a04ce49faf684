//! Input handling for the territory seed generator: the optional prior
//! export (identifier reuse) and the mandatory registry extract.

pub mod csv_utils;
pub mod extract;
pub mod prior;

pub use csv_utils::{DelimitedTable, get_field, get_optional, read_delimited_rows};
pub use extract::{ParsedExtract, UatRecord, parse_registry_extract};
pub use prior::{IdRegistry, load_id_registry};
