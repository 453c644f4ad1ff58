//! CSV export of a rendered mapping table.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{Result, UiError};
use crate::render::MappingTable;

/// First line of every export.
pub const CSV_HEADER_LINE: &str = "Source Datatype,Replicate Datatype,Target Datatype";

pub const CSV_MIME_TYPE: &str = "text/csv";

/// A generated file handed to a [`DownloadSink`](crate::view::DownloadSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl CsvDownload {
    pub fn new(file_name: String, content: String) -> Self {
        Self {
            file_name,
            mime_type: CSV_MIME_TYPE,
            content,
        }
    }
}

/// `datatype_mapping_<source>_to_<target>.csv`, with each whitespace run
/// replaced by a single underscore.
pub fn export_file_name(source: &str, target: &str) -> String {
    format!(
        "datatype_mapping_{}_to_{}.csv",
        underscore_whitespace(source),
        underscore_whitespace(target)
    )
}

fn underscore_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Serialize the table body below the fixed header line.
///
/// Every field is quoted, embedded quotes are doubled and each line ends
/// with CRLF.
pub fn table_to_csv(table: &MappingTable) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(|e| UiError::Export(e.to_string()))?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| UiError::Export(e.to_string()))?;
    let body = String::from_utf8(body).map_err(|e| UiError::Export(e.to_string()))?;

    let mut content = String::with_capacity(CSV_HEADER_LINE.len() + 2 + body.len());
    content.push_str(CSV_HEADER_LINE);
    content.push_str("\r\n");
    content.push_str(&body);
    Ok(content)
}

#[cfg(test)]
mod tests {
    use dtmap_model::MappingRow;
    use proptest::prelude::*;

    use super::*;
    use crate::render::render_table;

    fn table(rows: &[MappingRow]) -> MappingTable {
        render_table(rows).table().cloned().expect("non-empty table")
    }

    #[test]
    fn file_name_replaces_whitespace_runs() {
        assert_eq!(
            export_file_name("Oracle", "Postgres"),
            "datatype_mapping_Oracle_to_Postgres.csv"
        );
        assert_eq!(
            export_file_name("SQL  Server", "Azure\tSynapse Analytics"),
            "datatype_mapping_SQL_Server_to_Azure_Synapse_Analytics.csv"
        );
    }

    #[test]
    fn every_field_is_quoted() {
        let csv = table_to_csv(&table(&[MappingRow::new("NUMBER", "DECIMAL", "NUMERIC")])).unwrap();
        assert_eq!(
            csv,
            "Source Datatype,Replicate Datatype,Target Datatype\r\n\"NUMBER\",\"DECIMAL\",\"NUMERIC\"\r\n"
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let rows = [MappingRow {
            source_type: Some("CHAR(\"n\")".to_string()),
            replicate_type: Some("STRING, padded".to_string()),
            target_type: None,
        }];
        let csv = table_to_csv(&table(&rows)).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "\"CHAR(\"\"n\"\")\",\"STRING, padded\",\"N/A\"");
    }

    proptest! {
        #[test]
        fn file_name_has_no_whitespace(source in "[A-Za-z \t]{1,20}", target in "[A-Za-z \n]{1,20}") {
            let name = export_file_name(&source, &target);
            prop_assert!(!name.chars().any(char::is_whitespace));
            prop_assert!(name.starts_with("datatype_mapping_"));
            prop_assert!(name.ends_with(".csv"));
        }

        #[test]
        fn one_line_per_row(count in 1usize..30) {
            let rows: Vec<MappingRow> = (0..count)
                .map(|i| MappingRow::new(&format!("T{i}"), "STRING", "TEXT"))
                .collect();
            let csv = table_to_csv(&table(&rows)).unwrap();
            prop_assert_eq!(csv.matches("\r\n").count(), count + 1);
            prop_assert_eq!(csv.lines().next(), Some(CSV_HEADER_LINE));
        }
    }
}
