use serde::{Deserialize, Serialize};

/// Placeholder shown for a datatype the backend could not resolve.
pub const MISSING_TYPE: &str = "N/A";

/// One source → replicate → target row of a combined table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub replicate_type: Option<String>,
    #[serde(default)]
    pub target_type: Option<String>,
}

impl MappingRow {
    pub fn new(source: &str, replicate: &str, target: &str) -> Self {
        Self {
            source_type: Some(source.to_string()),
            replicate_type: Some(replicate.to_string()),
            target_type: Some(target.to_string()),
        }
    }

    /// The three display cells, with empty or absent values replaced by `N/A`.
    pub fn display_cells(&self) -> [String; 3] {
        [
            display_or_missing(self.source_type.as_deref()),
            display_or_missing(self.replicate_type.as_deref()),
            display_or_missing(self.target_type.as_deref()),
        ]
    }
}

fn display_or_missing(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => MISSING_TYPE.to_string(),
    }
}

/// Body of the combined-table endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResponse {
    #[serde(default)]
    pub table_data: Vec<MappingRow>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
}

impl MappingResponse {
    pub fn source_url(&self) -> Option<&str> {
        non_empty(self.source_url.as_deref())
    }

    pub fn target_url(&self) -> Option<&str> {
        non_empty(self.target_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
