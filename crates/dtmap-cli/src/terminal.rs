//! UI handles backed by the terminal.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, trace, warn};

use dtmap_core::{
    CsvDownload, DownloadSink, ExportControl, NO_MAPPINGS_MESSAGE, Notifier, ProgressIndicator,
    References, ReferencesPanel, RenderedTable, TablePanel, UiHandles,
};

use crate::display::{mapping_table, reference_lines};

const PROGRESS_TEMPLATE: &str = "{spinner} Scraping {bar:40.cyan/blue} {pos:>3}%";

/// Prints the rendered table to stdout.
#[derive(Debug, Default)]
pub struct TerminalTable;

impl TablePanel for TerminalTable {
    fn show(&self, table: &RenderedTable) {
        match table {
            RenderedTable::NoMappings => println!("{NO_MAPPINGS_MESSAGE}"),
            RenderedTable::Table(table) => println!("{}", mapping_table(table)),
        }
    }
}

/// Prints documentation links to stdout.
#[derive(Debug, Default)]
pub struct TerminalReferences;

impl ReferencesPanel for TerminalReferences {
    fn show(&self, references: &References) {
        for line in reference_lines(references) {
            println!("{line}");
        }
    }
}

/// Scraping progress as an indicatif bar on stderr.
#[derive(Default)]
pub struct TerminalProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalProgress {
    fn bar(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .map(|style| style.progress_chars("=> "))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

impl ProgressIndicator for TerminalProgress {
    fn show(&self) {
        let mut bar = self.bar();
        if bar.is_none() {
            let progress = ProgressBar::new(100);
            progress.set_style(progress_style());
            *bar = Some(progress);
        }
    }

    fn update(&self, percent: u8) {
        trace!(percent, "scraping progress");
        if let Some(bar) = self.bar().as_ref() {
            bar.set_position(u64::from(percent));
        }
    }

    fn hide(&self) {
        if let Some(bar) = self.bar().take() {
            bar.finish_and_clear();
        }
    }
}

/// Tracks whether exporting is currently offered.
#[derive(Debug, Default)]
pub struct TerminalExportControl {
    visible: AtomicBool,
}

impl TerminalExportControl {
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl ExportControl for TerminalExportControl {
    fn set_visible(&self, visible: bool) {
        debug!(visible, "export control");
        self.visible.store(visible, Ordering::SeqCst);
    }
}

/// Alerts go to stderr and the log.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        warn!(%message, "alert");
        eprintln!("alert: {message}");
    }
}

/// Saves exports into a directory, creating it when needed.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where a download with this file name is written. Path separators in
    /// the name become `_`, so the file always lands directly in `dir`.
    pub fn target_path(&self, download: &CsvDownload) -> PathBuf {
        self.dir.join(local_file_name(&download.file_name))
    }
}

fn local_file_name(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch == '/' || ch == '\\' || std::path::is_separator(ch) {
                '_'
            } else {
                ch
            }
        })
        .collect()
}

impl DownloadSink for DirectoryDownloads {
    fn deliver(&self, download: &CsvDownload) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.target_path(download);
        fs::write(&path, download.content.as_bytes())?;
        info!(path = %path.display(), mime = %download.mime_type, "export written");
        println!("Exported: {}", path.display());
        Ok(())
    }
}

pub fn terminal_ui(downloads: DirectoryDownloads) -> UiHandles {
    UiHandles {
        table: Arc::new(TerminalTable),
        references: Arc::new(TerminalReferences),
        progress: Arc::new(TerminalProgress::default()),
        export: Arc::new(TerminalExportControl::default()),
        notifier: Arc::new(StderrNotifier),
        downloads: Arc::new(downloads),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_lifecycle() {
        let progress = TerminalProgress::default();
        progress.update(10);
        assert!(progress.bar().is_none());

        progress.show();
        progress.update(42);
        assert_eq!(progress.bar().as_ref().map(ProgressBar::position), Some(42));

        progress.hide();
        progress.hide();
        assert!(progress.bar().is_none());
    }

    #[test]
    fn template_is_valid() {
        assert!(ProgressStyle::with_template(PROGRESS_TEMPLATE).is_ok());
    }

    #[test]
    fn export_control_tracks_visibility() {
        let export = TerminalExportControl::default();
        assert!(!export.is_visible());
        export.set_visible(true);
        assert!(export.is_visible());
    }

    #[test]
    fn separators_never_leave_the_export_dir() {
        assert_eq!(
            local_file_name("datatype_mapping_DB2_for_z/OS_to_..\\x.csv"),
            "datatype_mapping_DB2_for_z_OS_to_.._x.csv"
        );
    }
}
