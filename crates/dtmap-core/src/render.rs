//! Turning backend responses into what the table and references panels show.

use dtmap_model::{MappingResponse, MappingRow};

/// Column labels of a rendered mapping table.
pub const TABLE_HEADERS: [&str; 3] = ["Source Datatype", "Replicate Datatype", "Target Datatype"];

/// Shown instead of a table when the backend returns no rows.
pub const NO_MAPPINGS_MESSAGE: &str = "No mappings found.";

/// Shown in the references panel when neither documentation URL is known.
pub const NO_REFERENCES_MESSAGE: &str = "No documentation links available.";

/// Display cells of a non-empty mapping table, in response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    rows: Vec<[String; 3]>,
}

impl MappingTable {
    pub fn headers(&self) -> [&'static str; 3] {
        TABLE_HEADERS
    }

    pub fn rows(&self) -> &[[String; 3]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Content of the table container after a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedTable {
    NoMappings,
    Table(MappingTable),
}

impl RenderedTable {
    pub fn table(&self) -> Option<&MappingTable> {
        match self {
            Self::NoMappings => None,
            Self::Table(table) => Some(table),
        }
    }

    pub fn row_count(&self) -> usize {
        self.table().map_or(0, MappingTable::len)
    }
}

/// Render rows for display, keeping response order and filling gaps with `N/A`.
pub fn render_table(rows: &[MappingRow]) -> RenderedTable {
    if rows.is_empty() {
        return RenderedTable::NoMappings;
    }
    RenderedTable::Table(MappingTable {
        rows: rows.iter().map(MappingRow::display_cells).collect(),
    })
}

/// Content of the references panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum References {
    /// At least one documentation URL is known.
    Links {
        source: Option<String>,
        target: Option<String>,
    },
    Unavailable,
}

impl References {
    pub fn from_response(response: &MappingResponse) -> Self {
        let source = response.source_url().map(str::to_string);
        let target = response.target_url().map(str::to_string);
        if source.is_none() && target.is_none() {
            Self::Unavailable
        } else {
            Self::Links { source, target }
        }
    }
}
