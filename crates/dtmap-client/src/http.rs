//! `reqwest` implementation of [`MappingApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use dtmap_model::{MappingCatalog, MappingResponse, ProgressState, Selection};

use crate::api::MappingApi;
use crate::error::{ApiError, Result};

/// Combined table endpoint, relative to the base URL.
pub const COMBINED_TABLE_PATH: &str = "api/combined_table";
/// Re-scrape-then-combine endpoint.
pub const REFRESHED_TABLE_PATH: &str = "api/update_mappings_and_get_combined_table";
/// Scraping progress endpoint.
pub const PROGRESS_PATH: &str = "api/scraping_progress";
/// System catalog endpoint.
pub const CATALOG_PATH: &str = "api/mappings";

const USER_AGENT_VALUE: &str = concat!("dtmap/", env!("CARGO_PKG_VERSION"));

/// Requests carry no overall timeout; only connecting is bounded.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Mapping API client talking to a running backend.
#[derive(Debug, Clone)]
pub struct HttpMappingClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpMappingClient {
    /// Creates a client for the backend at `base_url` (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the combined-table request for `selection`, query included.
    pub fn combined_table_url(&self, selection: &Selection) -> Result<Url> {
        let path = if selection.refresh_sources {
            REFRESHED_TABLE_PATH
        } else {
            COMBINED_TABLE_PATH
        };
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("source", &selection.source)
            .append_pair("target", &selection.target)
            .append_pair("use_advanced", bool_param(selection.use_advanced))
            .append_pair("remapping_option", selection.remapping_option.as_str());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}

#[async_trait]
impl MappingApi for HttpMappingClient {
    async fn combined_table(&self, selection: &Selection) -> Result<MappingResponse> {
        let url = self.combined_table_url(selection)?;
        let response: MappingResponse = self.get_json(url).await?;
        debug!(rows = response.table_data.len(), "combined table received");
        Ok(response)
    }

    async fn scraping_progress(&self) -> Result<ProgressState> {
        let url = self.endpoint(PROGRESS_PATH)?;
        self.get_json(url).await
    }

    async fn catalog(&self) -> Result<MappingCatalog> {
        let url = self.endpoint(CATALOG_PATH)?;
        self.get_json(url).await
    }
}

fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Parses the base URL and makes sure relative joins keep any path prefix.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: "expected an http(s) URL".to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
