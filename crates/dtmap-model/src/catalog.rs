//! Scraped datatype documentation, as served by `GET /api/mappings`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row scraped from a system's documentation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedType {
    pub source_or_replicate_type: String,
    pub replicate_or_target_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMapping {
    #[serde(default)]
    pub data_types: Vec<ScrapedType>,
    #[serde(default)]
    pub url: Option<String>,
}

/// All known source and target systems, keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingCatalog {
    #[serde(default)]
    pub sources: BTreeMap<String, SystemMapping>,
    #[serde(default)]
    pub targets: BTreeMap<String, SystemMapping>,
}

impl MappingCatalog {
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}
