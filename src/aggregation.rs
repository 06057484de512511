//! Language distribution aggregation
//!
//! Builds the three-level table that everything downstream consumes:
//! series title → season number → normalized language code → episode count.
//! Sorted maps are used at every level so iteration (and with it the emitted
//! findings and serialized output) is deterministic.

use crate::catalog_retrieval::{Episode, MediaFile};
use crate::language::normalize;
use std::collections::{BTreeMap, HashMap};

/// Per-season mapping from normalized language code to episode count.
pub type SeasonLanguageCounts = BTreeMap<String, usize>;

/// Per-series mapping from season number to its language counts.
pub type SeriesLanguageTable = BTreeMap<u32, SeasonLanguageCounts>;

/// Run-wide mapping from series title to its language table.
///
/// Titles are assumed unique within one run; episodes of two series that
/// share a title end up merged under the same key.
pub type LibraryLanguageTable = BTreeMap<String, SeriesLanguageTable>;

/// Tallies the audio languages of one series' episodes.
///
/// Episodes without a file reference are skipped entirely (not yet
/// downloaded, so there is no audio to judge). A file id that does not
/// resolve in `files`, or a file without a recorded audio-language tag,
/// counts as [`crate::language::UNDETERMINED`].
pub fn tally_series(
    episodes: &[Episode],
    files: &HashMap<u64, MediaFile>,
) -> SeriesLanguageTable {
    let mut table = SeriesLanguageTable::new();

    for episode in episodes {
        let Some(file_id) = episode.file_id else {
            continue;
        };

        let raw_tag = files
            .get(&file_id)
            .and_then(|file| file.audio_languages.as_deref())
            .unwrap_or_default();

        let code = normalize(raw_tag);

        *table
            .entry(episode.season_number)
            .or_default()
            .entry(code)
            .or_insert(0) += 1;
    }

    table
}

/// Merges one series' table into the run-wide library table.
///
/// Counts are added rather than replaced, so merging is commutative and a
/// duplicated title silently combines both series (a known limitation of
/// keying on titles).
pub fn merge_series(library: &mut LibraryLanguageTable, title: &str, table: SeriesLanguageTable) {
    let series = library.entry(title.to_string()).or_default();

    for (season, counts) in table {
        let season_counts = series.entry(season).or_default();
        for (language, count) in counts {
            *season_counts.entry(language).or_insert(0) += count;
        }
    }
}
