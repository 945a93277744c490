//! Catalog module for scheme and village data.
//!
//! This module provides the static datasets the advisory core runs against:
//! scheme and village records, ordered catalogs with id lookup, and the
//! JSON loader that validates them at start-up.

#[allow(clippy::module_inception)]
pub mod catalog;
pub mod loader;
pub mod scheme;
pub mod village;

// Re-export commonly used types
pub use catalog::{SchemeCatalog, VillageCatalog};
pub use loader::{
    load_schemes_from_file, load_schemes_from_reader, load_schemes_from_str,
    load_villages_from_file, load_villages_from_reader, load_villages_from_str,
};
pub use scheme::{Scheme, SchemeBuilder, SchemeCategory};
pub use village::{Infrastructure, Village, VillageBuilder};
