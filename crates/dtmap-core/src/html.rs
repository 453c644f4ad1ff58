//! HTML fragments for the table container and references panel.
//!
//! Every value that came from the backend goes through
//! [`quick_xml::escape::escape`] before it is placed in markup, and only
//! `http`/`https` URLs become link targets.

use quick_xml::escape::escape;

use crate::render::{
    NO_MAPPINGS_MESSAGE, NO_REFERENCES_MESSAGE, References, RenderedTable, TABLE_HEADERS,
};

/// Markup for the table container.
pub fn table_fragment(rendered: &RenderedTable) -> String {
    let Some(table) = rendered.table() else {
        return format!("<p>{NO_MAPPINGS_MESSAGE}</p>\n");
    };
    let mut html = String::from("<table class=\"table\" id=\"generated-table\">\n");
    html.push_str("  <thead>\n    <tr>");
    for header in TABLE_HEADERS {
        html.push_str("<th>");
        html.push_str(header);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");
    for row in table.rows() {
        html.push_str("    <tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape(cell.as_str()));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");
    html
}

/// Markup for the references panel.
pub fn references_fragment(references: &References) -> String {
    match references {
        References::Unavailable => format!("<p>{NO_REFERENCES_MESSAGE}</p>\n"),
        References::Links { source, target } => {
            let mut html = String::from("<h3>References</h3>\n");
            html.push_str(&reference_line("Source Documentation", source.as_deref()));
            html.push_str(&reference_line("Target Documentation", target.as_deref()));
            html
        }
    }
}

/// References panel followed by the table, as one standalone fragment.
pub fn page_fragment(references: &References, rendered: &RenderedTable) -> String {
    format!(
        "<div id=\"url-links\">\n{}</div>\n<div id=\"table-container\">\n{}</div>\n",
        references_fragment(references),
        table_fragment(rendered)
    )
}

fn reference_line(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) if is_web_url(url) => {
            let href = escape(url);
            format!(
                "<p>{label}: <a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a></p>\n"
            )
        }
        Some(url) => format!("<p>{label}: {}</p>\n", escape(url)),
        None => format!("<p>{label}: not available</p>\n"),
    }
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
