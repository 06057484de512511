/// Data structures and traits for retrieving a media library's catalog.
///
/// This module provides structures to represent series, episodes and their
/// on-disk files as recorded by a library manager, as well as a trait for
/// implementing catalog providers.
mod sonarr;
mod sonarr_types;

pub use sonarr::SonarrProvider;

use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during catalog retrieval operations.
#[derive(Debug, Error)]
pub enum CatalogRetrievalError {
    /// Request to the catalog server failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The server rejected the supplied API key
    #[error("The server rejected the API key (HTTP 401)")]
    InvalidApiKey,

    /// Failed to parse the server's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// A series as listed by the library manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Identifier used to query the series' episodes and files
    pub id: u64,
    /// Display title, used as the grouping key in reports
    pub title: String,
}

/// A single episode of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    /// The season number this episode belongs to (0 for specials)
    pub season_number: u32,
    /// Reference to the downloaded file, absent when none exists yet
    pub file_id: Option<u64>,
}

/// A downloaded episode file with its recorded media info.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    /// The file id episodes reference
    pub id: u64,
    /// Raw audio-language tag, absent when no media info was recorded
    pub audio_languages: Option<String>,
}

/// Trait for catalog providers that can enumerate a library's contents.
///
/// Implementors of this trait expose the three views the audit needs: the
/// list of series, and per series its episodes and episode files. Each call
/// returns fully materialized data; the audit performs no I/O of its own.
pub trait CatalogProvider {
    /// Fetches the list of all series in the library.
    fn fetch_series(&self) -> Result<Vec<Series>, CatalogRetrievalError>;

    /// Fetches every episode of the given series.
    fn fetch_episodes(&self, series_id: u64) -> Result<Vec<Episode>, CatalogRetrievalError>;

    /// Fetches the given series' episode files, keyed by file id.
    fn fetch_files(
        &self,
        series_id: u64,
    ) -> Result<HashMap<u64, MediaFile>, CatalogRetrievalError>;
}
