use std::io;

use thiserror::Error;

use dtmap_client::ApiError;
use dtmap_model::SelectionError;

/// Errors surfaced by controller actions. Each one has already been shown to
/// the user through the notifier by the time it is returned.
#[derive(Debug, Error)]
pub enum UiError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("No table data to export")]
    NothingToExport,
    #[error("failed to serialize CSV: {0}")]
    Export(String),
    #[error("failed to save download: {0}")]
    Download(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;
