//! Types shared by the datatype mapping client.

pub mod catalog;
pub mod error;
pub mod mapping;
pub mod progress;
pub mod selection;

pub use catalog::{MappingCatalog, ScrapedType, SystemMapping};
pub use error::SelectionError;
pub use mapping::{MISSING_TYPE, MappingResponse, MappingRow};
pub use progress::ProgressState;
pub use selection::{RemappingOption, Selection, SelectionDraft};
