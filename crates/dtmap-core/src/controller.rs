//! The table controller: generation, rendering and export actions.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{Instrument, debug, error, info, info_span, warn};

use dtmap_client::MappingApi;
use dtmap_model::{Selection, SelectionDraft};

use crate::error::{Result, UiError};
use crate::export::{CsvDownload, export_file_name, table_to_csv};
use crate::poller::{DEFAULT_POLL_INTERVAL, ProgressPoller};
use crate::render::{MappingTable, References, RenderedTable, render_table};
use crate::view::UiHandles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub poll_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// What a successful generation put on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    pub rendered: RenderedTable,
    pub references: References,
}

pub struct TableController {
    api: Arc<dyn MappingApi>,
    ui: UiHandles,
    config: ControllerConfig,
    /// The table currently shown in the table container, if any.
    current: Mutex<Option<MappingTable>>,
}

impl TableController {
    pub fn new(api: Arc<dyn MappingApi>, ui: UiHandles, config: ControllerConfig) -> Self {
        Self {
            api,
            ui,
            config,
            current: Mutex::new(None),
        }
    }

    /// Validate the form values, fetch the combined table and render it.
    ///
    /// Every failure is alerted exactly once before being returned. Calls are
    /// not serialized: overlapping generations race and the last response to
    /// arrive owns the display.
    pub async fn generate_table(&self, draft: &SelectionDraft) -> Result<GeneratedTable> {
        let selection = match draft.validate() {
            Ok(selection) => selection,
            Err(err) => {
                warn!(error = %err, "selection rejected");
                self.ui.notifier.alert(&err.to_string());
                return Err(err.into());
            }
        };
        let span = info_span!(
            "generate_table",
            source = %selection.source,
            target = %selection.target,
            remapping_option = %selection.remapping_option,
            use_advanced = selection.use_advanced,
        );
        self.run_generation(selection).instrument(span).await
    }

    async fn run_generation(&self, selection: Selection) -> Result<GeneratedTable> {
        self.ui.export.set_visible(false);
        let poller = ProgressPoller::start(
            Arc::clone(&self.api),
            Arc::clone(&self.ui.progress),
            self.config.poll_interval,
        );

        match self.api.combined_table(&selection).await {
            Ok(response) => {
                let rendered = render_table(&response.table_data);
                self.ui.table.show(&rendered);
                *lock(&self.current) = rendered.table().cloned();

                let references = References::from_response(&response);
                self.ui.references.show(&references);
                self.ui.export.set_visible(true);
                poller.stop();

                info!(rows = rendered.row_count(), "table generated");
                Ok(GeneratedTable {
                    rendered,
                    references,
                })
            }
            Err(err) => {
                error!(error = %err, "failed to generate table");
                self.ui.notifier.alert(&format!(
                    "An error occurred while generating the table: {err}."
                ));
                poller.stop();
                Err(UiError::Api(err))
            }
        }
    }

    /// Export the currently rendered table through the download sink.
    pub fn export_to_csv(&self, source: &str, target: &str) -> Result<CsvDownload> {
        let Some(table) = self.current_table() else {
            warn!("export requested with no rendered table");
            let err = UiError::NothingToExport;
            self.ui.notifier.alert(&err.to_string());
            return Err(err);
        };

        let content = match table_to_csv(&table) {
            Ok(content) => content,
            Err(err) => {
                self.ui.notifier.alert(&err.to_string());
                return Err(err);
            }
        };
        let download = CsvDownload::new(export_file_name(source, target), content);

        if let Err(err) = self.ui.downloads.deliver(&download) {
            error!(file = %download.file_name, error = %err, "failed to deliver export");
            self.ui
                .notifier
                .alert(&format!("Could not save {}: {err}", download.file_name));
            return Err(err.into());
        }
        debug!(file = %download.file_name, rows = table.len(), "table exported");
        Ok(download)
    }

    pub fn current_table(&self) -> Option<MappingTable> {
        lock(&self.current).clone()
    }
}

fn lock(current: &Mutex<Option<MappingTable>>) -> MutexGuard<'_, Option<MappingTable>> {
    current.lock().unwrap_or_else(PoisonError::into_inner)
}
