//! JSON catalog loading.
//!
//! Catalog files carry the scheme and village datasets as a single JSON
//! object with a `schemes` (or `villages`) array. Validation happens here,
//! at the edge: the advisory core assumes well-formed catalogs and performs
//! no checks of its own.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::catalog::catalog::{SchemeCatalog, VillageCatalog};
use crate::catalog::scheme::Scheme;
use crate::catalog::village::Village;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct SchemeFile {
    schemes: Vec<Scheme>,
}

#[derive(Debug, Deserialize)]
struct VillageFile {
    villages: Vec<Village>,
}

/// Load a scheme catalog from a JSON string.
pub fn load_schemes_from_str(json: &str) -> Result<SchemeCatalog> {
    let file: SchemeFile = serde_json::from_str(json)?;
    let catalog = SchemeCatalog::new(file.schemes)?;
    info!("loaded {} schemes", catalog.len());
    Ok(catalog)
}

/// Load a scheme catalog from a reader.
pub fn load_schemes_from_reader<R: Read>(reader: R) -> Result<SchemeCatalog> {
    let file: SchemeFile = serde_json::from_reader(reader)?;
    let catalog = SchemeCatalog::new(file.schemes)?;
    info!("loaded {} schemes", catalog.len());
    Ok(catalog)
}

/// Load a scheme catalog from a JSON file.
pub fn load_schemes_from_file<P: AsRef<Path>>(path: P) -> Result<SchemeCatalog> {
    let file = File::open(path)?;
    load_schemes_from_reader(BufReader::new(file))
}

/// Load a village catalog from a JSON string.
pub fn load_villages_from_str(json: &str) -> Result<VillageCatalog> {
    let file: VillageFile = serde_json::from_str(json)?;
    let catalog = VillageCatalog::new(file.villages)?;
    info!("loaded {} villages", catalog.len());
    Ok(catalog)
}

/// Load a village catalog from a reader.
pub fn load_villages_from_reader<R: Read>(reader: R) -> Result<VillageCatalog> {
    let file: VillageFile = serde_json::from_reader(reader)?;
    let catalog = VillageCatalog::new(file.villages)?;
    info!("loaded {} villages", catalog.len());
    Ok(catalog)
}

/// Load a village catalog from a JSON file.
pub fn load_villages_from_file<P: AsRef<Path>>(path: P) -> Result<VillageCatalog> {
    let file = File::open(path)?;
    load_villages_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SCHEMES_JSON: &str = r#"{
        "schemes": [
            {
                "id": "pm-kisan",
                "name": "PM-KISAN",
                "fullName": "Pradhan Mantri Kisan Samman Nidhi",
                "category": "agriculture",
                "description": "Income support for landholding farmers.",
                "benefits": ["Rs 6000 per year in three installments"],
                "eligibility": ["Landholding farmer families"],
                "targetAudience": ["farmers"],
                "keywords": ["kisan samman", "income support"]
            }
        ]
    }"#;

    #[test]
    fn test_load_schemes_from_str() {
        let catalog = load_schemes_from_str(SCHEMES_JSON).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("pm-kisan"));
    }

    #[test]
    fn test_load_schemes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCHEMES_JSON.as_bytes()).unwrap();

        let catalog = load_schemes_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_schemes_missing_field_fails() {
        let json = r#"{"schemes": [{"id": "x", "name": "X"}]}"#;
        assert!(load_schemes_from_str(json).is_err());
    }

    #[test]
    fn test_load_schemes_duplicate_id_fails() {
        let json = r#"{
            "schemes": [
                {"id": "x", "name": "X", "fullName": "X", "category": "health",
                 "description": "", "benefits": [], "eligibility": [],
                 "targetAudience": [], "keywords": []},
                {"id": "x", "name": "X2", "fullName": "X2", "category": "health",
                 "description": "", "benefits": [], "eligibility": [],
                 "targetAudience": [], "keywords": []}
            ]
        }"#;
        assert!(load_schemes_from_str(json).is_err());
    }

    #[test]
    fn test_load_villages_from_str() {
        let json = r#"{
            "villages": [
                {
                    "id": "khandwa",
                    "name": "Khandwa",
                    "state": "Madhya Pradesh",
                    "district": "Khandwa",
                    "population": 2800,
                    "households": 620,
                    "literacyRate": 58.2,
                    "forestDependency": 72,
                    "mainOccupation": ["farming"],
                    "tribalPopulation": 64,
                    "infrastructure": {
                        "electricity": 70,
                        "water": 45,
                        "roads": 60,
                        "school": true,
                        "healthCenter": false
                    },
                    "challenges": ["Water scarcity in summer"],
                    "recommendedSchemes": ["pm-kisan"],
                    "description": "A tribal-majority village near the Satpura foothills."
                }
            ]
        }"#;

        let catalog = load_villages_from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("khandwa").unwrap().name, "Khandwa");
    }
}
