//! Scripted API and recording UI fakes shared by the controller tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use dtmap_client::{ApiError, MappingApi};
use dtmap_core::{
    CsvDownload, DownloadSink, ExportControl, Notifier, ProgressIndicator, References,
    ReferencesPanel, RenderedTable, TablePanel, UiHandles,
};
use dtmap_model::{MappingCatalog, MappingResponse, MappingRow, ProgressState, Selection};

type Scripted<T> = (Duration, Result<T, ApiError>);

/// Mapping API answering from queues of delayed results.
#[derive(Default)]
pub struct ScriptedApi {
    tables: Mutex<VecDeque<Scripted<MappingResponse>>>,
    progress: Mutex<VecDeque<Result<ProgressState, ApiError>>>,
    pub table_calls: AtomicUsize,
    pub progress_calls: AtomicUsize,
    pub selections: Mutex<Vec<Selection>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, delay: Duration, result: Result<MappingResponse, ApiError>) -> Self {
        self.tables.lock().unwrap().push_back((delay, result));
        self
    }

    pub fn with_progress(self, steps: &[i64]) -> Self {
        self.progress
            .lock()
            .unwrap()
            .extend(steps.iter().map(|&progress| Ok(ProgressState { progress })));
        self
    }

    pub fn with_progress_error(self) -> Self {
        self.progress
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network("connection reset".to_string())));
        self
    }

    pub fn table_calls(&self) -> usize {
        self.table_calls.load(Ordering::SeqCst)
    }

    pub fn progress_calls(&self) -> usize {
        self.progress_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MappingApi for ScriptedApi {
    async fn combined_table(&self, selection: &Selection) -> Result<MappingResponse, ApiError> {
        self.table_calls.fetch_add(1, Ordering::SeqCst);
        self.selections.lock().unwrap().push(selection.clone());
        let next = self.tables.lock().unwrap().pop_front();
        let (delay, result) = next.expect("unexpected combined_table call");
        tokio::time::sleep(delay).await;
        result
    }

    async fn scraping_progress(&self) -> Result<ProgressState, ApiError> {
        self.progress_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.progress.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(ProgressState { progress: 0 }))
    }

    async fn catalog(&self) -> Result<MappingCatalog, ApiError> {
        Ok(MappingCatalog::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Table(RenderedTable),
    References(References),
    ProgressShown,
    ProgressUpdated(u8),
    ProgressHidden,
    ExportVisible(bool),
    Alert(String),
    Download(CsvDownload),
}

/// Implements every UI handle by appending to one event log.
#[derive(Default)]
pub struct RecordingUi {
    events: Mutex<Vec<UiEvent>>,
    pub fail_downloads: AtomicBool,
}

impl RecordingUi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn handles(self: &Arc<Self>) -> UiHandles {
        UiHandles {
            table: self.clone(),
            references: self.clone(),
            progress: self.clone(),
            export: self.clone(),
            notifier: self.clone(),
            downloads: self.clone(),
        }
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn downloads(&self) -> Vec<CsvDownload> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Download(download) => Some(download),
                _ => None,
            })
            .collect()
    }

    pub fn progress_events(&self) -> Vec<UiEvent> {
        self.events()
            .into_iter()
            .filter(|event| {
                matches!(
                    event,
                    UiEvent::ProgressShown | UiEvent::ProgressUpdated(_) | UiEvent::ProgressHidden
                )
            })
            .collect()
    }

    /// Whether the progress bar is currently visible.
    pub fn progress_visible(&self) -> bool {
        self.progress_events()
            .last()
            .is_some_and(|event| *event != UiEvent::ProgressHidden)
    }

    pub fn export_visible(&self) -> bool {
        self.events()
            .iter()
            .rev()
            .find_map(|event| match event {
                UiEvent::ExportVisible(visible) => Some(*visible),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl TablePanel for RecordingUi {
    fn show(&self, table: &RenderedTable) {
        self.push(UiEvent::Table(table.clone()));
    }
}

impl ReferencesPanel for RecordingUi {
    fn show(&self, references: &References) {
        self.push(UiEvent::References(references.clone()));
    }
}

impl ProgressIndicator for RecordingUi {
    fn show(&self) {
        self.push(UiEvent::ProgressShown);
    }

    fn update(&self, percent: u8) {
        self.push(UiEvent::ProgressUpdated(percent));
    }

    fn hide(&self) {
        self.push(UiEvent::ProgressHidden);
    }
}

impl ExportControl for RecordingUi {
    fn set_visible(&self, visible: bool) {
        self.push(UiEvent::ExportVisible(visible));
    }
}

impl Notifier for RecordingUi {
    fn alert(&self, message: &str) {
        self.push(UiEvent::Alert(message.to_string()));
    }
}

impl DownloadSink for RecordingUi {
    fn deliver(&self, download: &CsvDownload) -> io::Result<()> {
        if self.fail_downloads.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.push(UiEvent::Download(download.clone()));
        Ok(())
    }
}

pub fn oracle_response() -> MappingResponse {
    MappingResponse {
        table_data: vec![MappingRow::new("NUMBER", "DECIMAL", "NUMERIC")],
        source_url: Some("http://a".to_string()),
        target_url: Some("http://b".to_string()),
    }
}
