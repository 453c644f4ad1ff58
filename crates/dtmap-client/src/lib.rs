//! Client for the datatype mapping backend.
//!
//! The backend exposes four JSON endpoints:
//!
//! - `GET /api/combined_table` - source → replicate → target rows for a selection
//! - `GET /api/update_mappings_and_get_combined_table` - the same after a re-scrape
//! - `GET /api/scraping_progress` - percentage of the current scraping run
//! - `GET /api/mappings` - every known source and target system
//!
//! [`MappingApi`] is the seam the controller is written against;
//! [`HttpMappingClient`] implements it with `reqwest`.

#![warn(missing_docs)]

mod api;
pub mod error;
pub mod http;

pub use api::MappingApi;
pub use error::{ApiError, Result};
pub use http::HttpMappingClient;
