/// Sonarr v4 API response types for deserialization.
///
/// These structures mirror the JSON response format of the Sonarr v3 REST
/// endpoints (served unchanged by Sonarr v4). Only the consumed fields are
/// named; everything else in the responses is ignored.
use serde::Deserialize;

/// One entry from the `/series` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct SonarrSeries {
    /// Series id used in the episode and episodefile queries
    pub id: u64,
    /// Display title of the series
    pub title: String,
}

/// One entry from the `/episode?seriesId=` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SonarrEpisode {
    /// Season number (0 for specials)
    pub season_number: u32,
    /// Id of the downloaded file; 0 or missing when no file exists
    #[serde(default)]
    pub episode_file_id: Option<u64>,
}

/// One entry from the `/episodefile?seriesId=` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SonarrEpisodeFile {
    /// The file id episodes reference via `episodeFileId`
    pub id: u64,
    /// Media info block, missing when the file was never analyzed
    #[serde(default)]
    pub media_info: Option<SonarrMediaInfo>,
}

/// The `mediaInfo` block of an episode file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SonarrMediaInfo {
    /// Free-form audio-language tag, e.g. "eng" or "ENG / Ita"
    #[serde(default)]
    pub audio_languages: Option<String>,
}
