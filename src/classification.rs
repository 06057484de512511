//! Discrepancy classification
//!
//! Consumes the aggregated language table and produces the flat list of
//! findings the presentation layer renders. Two mutually exclusive modes:
//! plain mismatch detection (is a season/series mixing languages?) and
//! wanted-language coverage (how many episodes carry a language the caller
//! asked for?). The mode is selected by whether a wanted set is supplied.

use crate::aggregation::{LibraryLanguageTable, SeasonLanguageCounts};
use crate::language::UNDETERMINED;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single classified discrepancy (or, with `include_all`, conformity).
///
/// Serializes as an internally tagged record so a findings list written to
/// JSON carries every field of every variant losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Finding {
    /// A season whose episodes carry more than one distinct language.
    MixedSeason {
        series: String,
        season: u32,
        /// Raw per-language episode counts, always including `und`.
        languages: SeasonLanguageCounts,
    },

    /// A single-language season, only reported when `include_all` is set.
    UniformSeason {
        series: String,
        season: u32,
        language: String,
        count: usize,
    },

    /// A series whose seasons together carry more than one distinct language.
    MixedSeries {
        series: String,
        languages: BTreeSet<String>,
    },

    /// A single-language series, only reported when `include_all` is set.
    UniformSeries { series: String, language: String },

    /// No episode in the season carries any wanted language.
    SeasonUnsupported {
        series: String,
        season: u32,
        total: usize,
        supported: usize,
        wanted: BTreeSet<String>,
    },

    /// Some but not all episodes in the season carry a wanted language.
    SeasonPartial {
        series: String,
        season: u32,
        total: usize,
        supported: usize,
        wanted: BTreeSet<String>,
    },

    /// Every episode in the season carries a wanted language, only reported
    /// when `include_all` is set.
    SeasonFull {
        series: String,
        season: u32,
        total: usize,
        supported: usize,
        wanted: BTreeSet<String>,
    },
}

impl Finding {
    /// The title of the series this finding belongs to.
    pub fn series(&self) -> &str {
        match self {
            Finding::MixedSeason { series, .. }
            | Finding::UniformSeason { series, .. }
            | Finding::MixedSeries { series, .. }
            | Finding::UniformSeries { series, .. }
            | Finding::SeasonUnsupported { series, .. }
            | Finding::SeasonPartial { series, .. }
            | Finding::SeasonFull { series, .. } => series,
        }
    }
}

/// Detects seasons and series that mix audio languages.
///
/// With `ignore_unknown`, the `und` entry is dropped before deciding whether
/// a season or series is mixed, but the raw counts (including `und`) are
/// always what ends up in the emitted payload. Uniform findings are driven
/// by the unfiltered key set: a season or series whose only recorded
/// language is `und` is still reported as uniform under `include_all`.
///
/// Findings come out in deterministic order: series by title, each series'
/// season findings ascending, then that series' own finding.
pub fn detect_mismatches(
    library: &LibraryLanguageTable,
    include_all: bool,
    ignore_unknown: bool,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (series, seasons) in library {
        let mut series_languages: BTreeSet<String> = BTreeSet::new();

        for (&season, counts) in seasons {
            let effective: Vec<&String> = counts
                .keys()
                .filter(|language| !(ignore_unknown && language.as_str() == UNDETERMINED))
                .collect();

            if effective.len() > 1 {
                findings.push(Finding::MixedSeason {
                    series: series.clone(),
                    season,
                    languages: counts.clone(),
                });
            } else if include_all && counts.len() == 1 {
                if let Some((language, &count)) = counts.iter().next() {
                    findings.push(Finding::UniformSeason {
                        series: series.clone(),
                        season,
                        language: language.clone(),
                        count,
                    });
                }
            }

            series_languages.extend(effective.into_iter().cloned());
        }

        if series_languages.len() > 1 {
            findings.push(Finding::MixedSeries {
                series: series.clone(),
                languages: series_languages,
            });
        } else if include_all {
            // An exclusion that emptied the set means every counted episode
            // was "und"; report that rather than nothing. A series with no
            // counted episodes at all stays silent.
            let language = series_languages
                .into_iter()
                .next()
                .or_else(|| seasons.values().flat_map(|counts| counts.keys()).next().cloned());

            if let Some(language) = language {
                findings.push(Finding::UniformSeries {
                    series: series.clone(),
                    language,
                });
            }
        }
    }

    findings
}

/// Evaluates how well each season covers the caller's wanted languages.
///
/// An entry's episodes count as supported when any of the entry's `/`-joined
/// tokens is wanted, so a dual-audio `eng/ita` file satisfies a caller who
/// wants `eng`. Coverage is season-scoped; no series-level findings are
/// produced. Seasons whose episodes were all excluded as `und` are skipped.
pub fn evaluate_coverage(
    library: &LibraryLanguageTable,
    wanted: &BTreeSet<String>,
    include_all: bool,
    ignore_unknown: bool,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (series, seasons) in library {
        for (&season, counts) in seasons {
            let mut total = 0;
            let mut supported = 0;

            for (language, &count) in counts {
                if ignore_unknown && language == UNDETERMINED {
                    continue;
                }

                total += count;
                if language.split('/').any(|token| wanted.contains(token)) {
                    supported += count;
                }
            }

            if total == 0 {
                continue;
            }

            let finding = if supported == 0 {
                Finding::SeasonUnsupported {
                    series: series.clone(),
                    season,
                    total,
                    supported,
                    wanted: wanted.clone(),
                }
            } else if supported == total {
                if !include_all {
                    continue;
                }
                Finding::SeasonFull {
                    series: series.clone(),
                    season,
                    total,
                    supported,
                    wanted: wanted.clone(),
                }
            } else {
                Finding::SeasonPartial {
                    series: series.clone(),
                    season,
                    total,
                    supported,
                    wanted: wanted.clone(),
                }
            };

            findings.push(finding);
        }
    }

    findings
}
