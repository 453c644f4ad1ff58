//! Table controller for the datatype mapping client.
//!
//! [`TableController`] validates the user's selection, requests the combined
//! table, polls scraping progress while the request is outstanding, renders
//! the result and exports it to CSV. All UI effects go through the handles in
//! [`view`], so the controller runs the same against a terminal or a fake.

pub mod controller;
pub mod error;
pub mod export;
pub mod html;
pub mod poller;
pub mod render;
pub mod view;

pub use controller::{ControllerConfig, GeneratedTable, TableController};
pub use error::{Result, UiError};
pub use export::{CSV_HEADER_LINE, CSV_MIME_TYPE, CsvDownload, export_file_name, table_to_csv};
pub use poller::{DEFAULT_POLL_INTERVAL, PollState, PollerHandle, ProgressPoller};
pub use render::{
    MappingTable, NO_MAPPINGS_MESSAGE, NO_REFERENCES_MESSAGE, References, RenderedTable,
    TABLE_HEADERS, render_table,
};
pub use view::{
    DownloadSink, ExportControl, Notifier, ProgressIndicator, ReferencesPanel, TablePanel,
    UiHandles,
};
