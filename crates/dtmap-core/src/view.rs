//! UI handles the controller drives.
//!
//! These stand in for the page elements the controller updates. The CLI
//! provides terminal implementations; tests use recording fakes.

use std::io;
use std::sync::Arc;

use crate::export::CsvDownload;
use crate::render::{References, RenderedTable};

/// The table container. Each call replaces its whole content.
pub trait TablePanel: Send + Sync {
    fn show(&self, table: &RenderedTable);
}

pub trait ReferencesPanel: Send + Sync {
    fn show(&self, references: &References);
}

/// The progress bar container and its fill.
pub trait ProgressIndicator: Send + Sync {
    /// Make the bar visible.
    fn show(&self);
    /// Set the fill and the text label to `percent`.
    fn update(&self, percent: u8);
    /// Reset the fill to 0% and hide the bar.
    fn hide(&self);
}

pub trait ExportControl: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// Blocking user-facing alerts.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Where an exported file ends up.
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, download: &CsvDownload) -> io::Result<()>;
}

/// Every handle the controller needs, injected at construction.
#[derive(Clone)]
pub struct UiHandles {
    pub table: Arc<dyn TablePanel>,
    pub references: Arc<dyn ReferencesPanel>,
    pub progress: Arc<dyn ProgressIndicator>,
    pub export: Arc<dyn ExportControl>,
    pub notifier: Arc<dyn Notifier>,
    pub downloads: Arc<dyn DownloadSink>,
}
