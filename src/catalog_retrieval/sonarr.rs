/// Sonarr catalog provider implementation.
use super::sonarr_types::{SonarrEpisode, SonarrEpisodeFile, SonarrSeries};
use super::{CatalogProvider, CatalogRetrievalError, Episode, MediaFile, Series};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Catalog provider for a Sonarr v4 instance.
///
/// This provider fetches series, episode and episode-file records from the
/// `/api/v3` REST endpoints, authenticating every request with the
/// `X-Api-Key` header.
pub struct SonarrProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl SonarrProvider {
    /// Creates a new provider for the given Sonarr instance.
    ///
    /// The base URL may point at the instance root or directly at its
    /// `/api/v3` prefix; both are accepted.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: normalize_base_url(base_url),
            api_key: api_key.to_string(),
        }
    }

    /// Returns the normalized API base URL this provider talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request against an API endpoint and parses the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogRetrievalError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .map_err(|e| CatalogRetrievalError::RequestError(e.to_string()))?;

        if response.status() == 401 {
            return Err(CatalogRetrievalError::InvalidApiKey);
        }

        if !response.status().is_success() {
            return Err(CatalogRetrievalError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| CatalogRetrievalError::ParseError(e.to_string()))
    }

    /// Converts a Sonarr episode to our internal Episode structure.
    fn convert_episode(episode: SonarrEpisode) -> Episode {
        // Sonarr encodes "no file downloaded" as episodeFileId 0
        let file_id = episode.episode_file_id.filter(|&id| id != 0);

        Episode {
            season_number: episode.season_number,
            file_id,
        }
    }

    /// Converts a Sonarr episode file to our internal MediaFile structure.
    fn convert_file(file: SonarrEpisodeFile) -> MediaFile {
        MediaFile {
            id: file.id,
            audio_languages: file.media_info.and_then(|info| info.audio_languages),
        }
    }
}

impl CatalogProvider for SonarrProvider {
    fn fetch_series(&self) -> Result<Vec<Series>, CatalogRetrievalError> {
        let series: Vec<SonarrSeries> = self.get_json("series", &[])?;

        Ok(series
            .into_iter()
            .map(|entry| Series {
                id: entry.id,
                title: entry.title,
            })
            .collect())
    }

    fn fetch_episodes(&self, series_id: u64) -> Result<Vec<Episode>, CatalogRetrievalError> {
        let episodes: Vec<SonarrEpisode> =
            self.get_json("episode", &[("seriesId", series_id.to_string())])?;

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }

    fn fetch_files(
        &self,
        series_id: u64,
    ) -> Result<HashMap<u64, MediaFile>, CatalogRetrievalError> {
        let files: Vec<SonarrEpisodeFile> =
            self.get_json("episodefile", &[("seriesId", series_id.to_string())])?;

        Ok(files
            .into_iter()
            .map(|file| (file.id, Self::convert_file(file)))
            .collect())
    }
}

/// Ensures a user-supplied base URL ends in the `/api/v3` prefix.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');

    if trimmed.ends_with("/api/v3") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api/v3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_appends_api_prefix() {
        assert_eq!(
            normalize_base_url("http://localhost:8989"),
            "http://localhost:8989/api/v3"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8989/"),
            "http://localhost:8989/api/v3"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_existing_prefix() {
        assert_eq!(
            normalize_base_url("http://localhost:8989/api/v3"),
            "http://localhost:8989/api/v3"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8989/api/v3/"),
            "http://localhost:8989/api/v3"
        );
    }

    #[test]
    fn test_convert_episode_treats_file_id_zero_as_absent() {
        let with_file: SonarrEpisode = serde_json::from_str(
            r#"{"seasonNumber": 2, "episodeFileId": 17, "title": "Pilot"}"#,
        )
        .unwrap();
        assert_eq!(
            SonarrProvider::convert_episode(with_file),
            Episode {
                season_number: 2,
                file_id: Some(17),
            }
        );

        let no_file: SonarrEpisode =
            serde_json::from_str(r#"{"seasonNumber": 2, "episodeFileId": 0}"#).unwrap();
        assert_eq!(SonarrProvider::convert_episode(no_file).file_id, None);

        let missing: SonarrEpisode = serde_json::from_str(r#"{"seasonNumber": 2}"#).unwrap();
        assert_eq!(SonarrProvider::convert_episode(missing).file_id, None);
    }

    #[test]
    fn test_episode_without_season_number_fails_to_parse() {
        // A record with no season number is a contract violation, surfaced
        // as a parse error rather than silently defaulted
        let result: Result<SonarrEpisode, _> =
            serde_json::from_str(r#"{"episodeFileId": 17}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_file_flattens_media_info() {
        let tagged: SonarrEpisodeFile = serde_json::from_str(
            r#"{"id": 5, "mediaInfo": {"audioLanguages": "eng / ita", "videoCodec": "x265"}}"#,
        )
        .unwrap();
        assert_eq!(
            SonarrProvider::convert_file(tagged),
            MediaFile {
                id: 5,
                audio_languages: Some("eng / ita".to_string()),
            }
        );

        let bare: SonarrEpisodeFile = serde_json::from_str(r#"{"id": 6}"#).unwrap();
        assert_eq!(SonarrProvider::convert_file(bare).audio_languages, None);
    }
}
