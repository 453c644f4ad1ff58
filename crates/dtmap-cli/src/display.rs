//! Terminal tables for mapping results and the system catalog.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dtmap_core::{MappingTable, NO_REFERENCES_MESSAGE, References};
use dtmap_model::{MISSING_TYPE, MappingCatalog, SystemMapping};

/// Build the mapping table exactly as rendered: response order, `N/A` dimmed.
pub fn mapping_table(table: &MappingTable) -> Table {
    let mut out = Table::new();
    out.set_header(table.headers().iter().map(|label| header_cell(label)));
    apply_table_style(&mut out);
    for row in table.rows() {
        out.add_row(row.iter().map(|value| type_cell(value)));
    }
    out
}

/// Lines for the references panel.
pub fn reference_lines(references: &References) -> Vec<String> {
    match references {
        References::Unavailable => vec![NO_REFERENCES_MESSAGE.to_string()],
        References::Links { source, target } => vec![
            reference_line("Source", source.as_deref()),
            reference_line("Target", target.as_deref()),
        ],
    }
}

fn reference_line(label: &str, url: Option<&str>) -> String {
    format!(
        "{label} Documentation: {}",
        url.unwrap_or("not available")
    )
}

/// Build the catalog listing: one row per system and role.
pub fn systems_table(catalog: &MappingCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("System"),
        header_cell("Role"),
        header_cell("Types"),
        header_cell("Documentation"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (name, mapping) in &catalog.sources {
        table.add_row(system_row(name, "source", mapping));
    }
    for (name, mapping) in &catalog.targets {
        table.add_row(system_row(name, "target", mapping));
    }
    table
}

fn system_row(name: &str, role: &str, mapping: &SystemMapping) -> Vec<Cell> {
    let role_color = if role == "source" {
        Color::Green
    } else {
        Color::Blue
    };
    vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new(role).fg(role_color),
        Cell::new(mapping.data_types.len()),
        match mapping.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => Cell::new(url),
            None => dim_cell("-"),
        },
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(value: &str) -> Cell {
    if value == MISSING_TYPE {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
