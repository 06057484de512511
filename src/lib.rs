//! LanguagePatrol - Audit a Sonarr library for audio-language discrepancies
//!
//! This library provides the core functionality for fetching a Sonarr v4
//! library's catalog, normalizing the recorded audio-language tags, and
//! classifying seasons and series that mix languages or miss a wanted set
//! of languages.

mod aggregation;
mod catalog_retrieval;
mod classification;
mod flags;
mod language;
mod report;

use std::collections::BTreeSet;
use std::io;
use thiserror::Error;

// Re-export error types
pub use catalog_retrieval::CatalogRetrievalError;

// Re-export the catalog seam and its data types
pub use catalog_retrieval::{CatalogProvider, Episode, MediaFile, Series, SonarrProvider};

// Re-export the core pipeline pieces
pub use aggregation::{
    LibraryLanguageTable, SeasonLanguageCounts, SeriesLanguageTable, merge_series, tally_series,
};
pub use classification::{Finding, detect_mismatches, evaluate_coverage};
pub use language::{UNDETERMINED, normalize, parse_wanted_languages};
pub use report::render_console;

/// Policy flags controlling which findings an audit produces.
#[derive(Debug, Clone, Default)]
pub struct AuditPolicy {
    /// Also report uniform (single-language) seasons and series
    pub show_all: bool,

    /// Exclude the `und` code from mixing and coverage evaluation
    pub ignore_unknown: bool,

    /// Wanted languages as single canonical tokens; a non-empty set switches
    /// the audit from mismatch detection to coverage evaluation
    pub wanted_languages: BTreeSet<String>,
}

/// Progress event emitted during an audit
///
/// These events allow library users to track progress and provide feedback
/// while the catalog is being fetched and analyzed.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Fetching the series list from the catalog server
    FetchingSeries,

    /// Series list successfully fetched
    SeriesFetched { count: usize },

    /// Fetching and tallying one series' episodes and files
    ProcessingSeries {
        index: usize,
        total: usize,
        title: String,
    },

    /// One series failed to fetch; the audit continues without it
    SeriesFailed { title: String, error: String },

    /// Audit complete
    Complete { finding_count: usize },
}

/// Top-level error type for LanguagePatrol operations
#[derive(Debug, Error)]
pub enum LanguagePatrolError {
    /// Error during catalog retrieval
    #[error("Catalog retrieval error: {0}")]
    CatalogRetrieval(#[from] CatalogRetrievalError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to serialize findings for output
    #[error("Failed to serialize findings: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Audits a library's catalog for audio-language discrepancies
///
/// This function fetches the list of series from the given provider, tallies
/// the normalized audio languages of every downloaded episode per season,
/// and classifies the result according to the policy: plain mismatch
/// detection when no wanted languages are set, wanted-language coverage
/// otherwise.
///
/// A failure fetching one series' episodes or files is reported through a
/// [`ProgressEvent::SeriesFailed`] event and that series is skipped; only a
/// failure fetching the series list itself aborts the audit.
///
/// Progress events are emitted through the provided callback, allowing
/// callers to display status or remain silent.
///
/// # Examples
///
/// ```no_run
/// use language_patrol::{AuditPolicy, SonarrProvider, audit_library};
///
/// let provider = SonarrProvider::new("http://localhost:8989", "secret");
/// let findings = audit_library(&provider, &AuditPolicy::default(), |_| {}).unwrap();
///
/// for finding in &findings {
///     println!("{}", finding.series());
/// }
/// ```
pub fn audit_library<P, F>(
    provider: &P,
    policy: &AuditPolicy,
    mut progress_callback: F,
) -> Result<Vec<Finding>, LanguagePatrolError>
where
    P: CatalogProvider,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::FetchingSeries);
    let series_list = provider.fetch_series()?;

    progress_callback(ProgressEvent::SeriesFetched {
        count: series_list.len(),
    });

    let mut library = LibraryLanguageTable::new();
    let total = series_list.len();

    for (index, series) in series_list.iter().enumerate() {
        progress_callback(ProgressEvent::ProcessingSeries {
            index,
            total,
            title: series.title.clone(),
        });

        // Both views of the series must materialize before it is tallied
        let fetched = provider.fetch_episodes(series.id).and_then(|episodes| {
            provider
                .fetch_files(series.id)
                .map(|files| (episodes, files))
        });

        match fetched {
            Ok((episodes, files)) => {
                let table = tally_series(&episodes, &files);
                merge_series(&mut library, &series.title, table);
            }
            Err(error) => {
                progress_callback(ProgressEvent::SeriesFailed {
                    title: series.title.clone(),
                    error: error.to_string(),
                });
            }
        }
    }

    let findings = if policy.wanted_languages.is_empty() {
        detect_mismatches(&library, policy.show_all, policy.ignore_unknown)
    } else {
        evaluate_coverage(
            &library,
            &policy.wanted_languages,
            policy.show_all,
            policy.ignore_unknown,
        )
    };

    progress_callback(ProgressEvent::Complete {
        finding_count: findings.len(),
    });

    Ok(findings)
}
