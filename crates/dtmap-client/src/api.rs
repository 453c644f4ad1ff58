use async_trait::async_trait;

use dtmap_model::{MappingCatalog, MappingResponse, ProgressState, Selection};

use crate::error::Result;

/// Backend operations the table controller depends on.
///
/// Implemented over HTTP by [`HttpMappingClient`](crate::HttpMappingClient);
/// tests substitute scripted fakes.
#[async_trait]
pub trait MappingApi: Send + Sync {
    /// Fetch the combined source → replicate → target table for a selection.
    ///
    /// When `selection.refresh_sources` is set the backend re-scrapes its
    /// documentation pages first.
    async fn combined_table(&self, selection: &Selection) -> Result<MappingResponse>;

    /// Fetch the backend's current scraping progress.
    async fn scraping_progress(&self) -> Result<ProgressState>;

    /// Fetch every known source and target system.
    async fn catalog(&self) -> Result<MappingCatalog>;
}
