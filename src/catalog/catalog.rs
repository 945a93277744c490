//! Ordered, immutable catalogs with id lookup.
//!
//! Catalogs are built once at start-up and shared read-only after that.
//! Iteration order is always the load order ("catalog order"), which the
//! classifier and recommendation engine rely on for deterministic output;
//! an ahash side index provides O(1) lookup by id.

use ahash::AHashMap;

use crate::catalog::scheme::{Scheme, SchemeCategory};
use crate::catalog::village::Village;
use crate::error::{Result, SahayakError};

/// An ordered collection of schemes with unique ids.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
    by_id: AHashMap<String, usize>,
}

impl SchemeCatalog {
    /// Create a catalog from a list of schemes.
    ///
    /// Fails if two entries share an id.
    pub fn new(schemes: Vec<Scheme>) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(schemes.len());
        for (index, scheme) in schemes.iter().enumerate() {
            if by_id.insert(scheme.id.clone(), index).is_some() {
                return Err(SahayakError::catalog(format!(
                    "duplicate scheme id '{}'",
                    scheme.id
                )));
            }
        }
        Ok(SchemeCatalog { schemes, by_id })
    }

    /// Look up a scheme by id.
    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.by_id.get(id).map(|&index| &self.schemes[index])
    }

    /// Check whether a scheme id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterate over schemes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.iter()
    }

    /// All schemes of the given category, in catalog order.
    pub fn by_category(&self, category: SchemeCategory) -> impl Iterator<Item = &Scheme> {
        self.schemes.iter().filter(move |s| s.category == category)
    }

    /// Resolve a list of ids against the catalog, preserving the list's
    /// order and skipping ids that do not exist.
    pub fn resolve<'a, I>(&self, ids: I) -> Vec<&Scheme>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter_map(|id| self.get(id)).collect()
    }

    /// Number of schemes.
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

/// An ordered collection of villages with unique ids.
#[derive(Debug, Clone)]
pub struct VillageCatalog {
    villages: Vec<Village>,
    by_id: AHashMap<String, usize>,
}

impl VillageCatalog {
    /// Create a catalog from a list of villages.
    ///
    /// Fails if two entries share an id.
    pub fn new(villages: Vec<Village>) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(villages.len());
        for (index, village) in villages.iter().enumerate() {
            if by_id.insert(village.id.clone(), index).is_some() {
                return Err(SahayakError::catalog(format!(
                    "duplicate village id '{}'",
                    village.id
                )));
            }
        }
        Ok(VillageCatalog { villages, by_id })
    }

    /// Look up a village by id.
    pub fn get(&self, id: &str) -> Option<&Village> {
        self.by_id.get(id).map(|&index| &self.villages[index])
    }

    /// Iterate over villages in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Village> {
        self.villages.iter()
    }

    /// Number of villages.
    pub fn len(&self) -> usize {
        self.villages.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.villages.is_empty()
    }
}
