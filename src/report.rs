//! Console report rendering
//!
//! Turns the classifier's findings into the aligned, flag-decorated text
//! report. Pure string building, so the layout is testable without touching
//! stdout; the binary just prints the result.

use crate::aggregation::SeasonLanguageCounts;
use crate::classification::Finding;
use crate::flags::flags_for;
use std::collections::BTreeSet;

/// Width used to align the labels in the printed report.
const PADDING_WIDTH: usize = 24;

/// Renders the complete findings report, grouped per series with a blank
/// line between series.
pub fn render_console(findings: &[Finding]) -> String {
    let mut out = String::new();
    out.push_str("\n📊 Results:\n");

    if findings.is_empty() {
        out.push_str("    ✅ No language discrepancies detected.\n");
        return out;
    }

    let mut last_series: Option<&str> = None;
    for finding in findings {
        if last_series.is_some_and(|last| last != finding.series()) {
            out.push('\n');
        }
        last_series = Some(finding.series());

        out.push_str(&render_finding(finding));
        out.push('\n');
    }

    out
}

/// Renders a single finding as one report line.
fn render_finding(finding: &Finding) -> String {
    match finding {
        Finding::MixedSeason {
            series,
            season,
            languages,
        } => format!(
            "{} {} - Season {}: {}",
            pad_label("⚠️  MIXED SEASON", PADDING_WIDTH),
            series,
            season,
            format_counts(languages)
        ),

        Finding::UniformSeason {
            series,
            season,
            language,
            count,
        } => format!(
            "{} {} - Season {}: {{{} {}: {}}}",
            pad_label("✅ SEASON OK", PADDING_WIDTH - 2),
            series,
            season,
            flags_for(language),
            language,
            count
        ),

        Finding::MixedSeries { series, languages } => format!(
            "{} {}: languages used: [{}]",
            pad_label("⚠️  MIXED SERIES", PADDING_WIDTH),
            series,
            format_language_list(languages)
        ),

        Finding::UniformSeries { series, language } => format!(
            "{} {}: single language: [{} {}]",
            pad_label("✅ SERIES OK", PADDING_WIDTH - 2),
            series,
            flags_for(language),
            language
        ),

        Finding::SeasonUnsupported {
            series,
            season,
            total,
            supported,
            wanted,
        } => format!(
            "{} {} - Season {}: {}/{} episodes in wanted languages [{}]",
            pad_label("⛔ NO COVERAGE", PADDING_WIDTH - 2),
            series,
            season,
            supported,
            total,
            format_language_list(wanted)
        ),

        Finding::SeasonPartial {
            series,
            season,
            total,
            supported,
            wanted,
        } => format!(
            "{} {} - Season {}: {}/{} episodes in wanted languages [{}]",
            pad_label("⚠️  PARTIAL COVERAGE", PADDING_WIDTH),
            series,
            season,
            supported,
            total,
            format_language_list(wanted)
        ),

        Finding::SeasonFull {
            series,
            season,
            total,
            supported,
            wanted,
        } => format!(
            "{} {} - Season {}: {}/{} episodes in wanted languages [{}]",
            pad_label("✅ FULL COVERAGE", PADDING_WIDTH - 2),
            series,
            season,
            supported,
            total,
            format_language_list(wanted)
        ),
    }
}

/// Wraps a label in brackets and pads it to the given column width.
///
/// Labels starting with "⚠️" carry an extra space and two more columns: the
/// warning sign renders double-width in common terminals, while "✅" and
/// "⛔" occupy a single code point.
fn pad_label(label: &str, width: usize) -> String {
    format!("{:<width$}", format!("  [{label}]"))
}

/// Formats per-language counts as `{🇬🇧 eng: 1, 🇮🇹 ita: 2}`.
fn format_counts(languages: &SeasonLanguageCounts) -> String {
    let entries: Vec<String> = languages
        .iter()
        .map(|(code, count)| format!("{} {}: {}", flags_for(code), code, count))
        .collect();

    format!("{{{}}}", entries.join(", "))
}

/// Formats a language set as `🇬🇧 eng, 🇮🇹 ita`.
fn format_language_list(languages: &BTreeSet<String>) -> String {
    languages
        .iter()
        .map(|code| format!("{} {}", flags_for(code), code))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, usize)]) -> SeasonLanguageCounts {
        entries
            .iter()
            .map(|(language, count)| (language.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_render_empty_report() {
        let report = render_console(&[]);
        assert!(report.contains("📊 Results:"));
        assert!(report.contains("No language discrepancies detected."));
    }

    #[test]
    fn test_render_mixed_season_line() {
        let finding = Finding::MixedSeason {
            series: "Show A".to_string(),
            season: 1,
            languages: counts(&[("eng", 1), ("ita", 2)]),
        };

        let line = render_finding(&finding);
        assert!(line.contains("[⚠️  MIXED SEASON]"));
        assert!(line.contains("Show A - Season 1"));
        assert!(line.contains("{🇬🇧 eng: 1, 🇮🇹 ita: 2}"));
    }

    #[test]
    fn test_render_uniform_series_line() {
        let finding = Finding::UniformSeries {
            series: "Show B".to_string(),
            language: "eng".to_string(),
        };

        let line = render_finding(&finding);
        assert!(line.contains("[✅ SERIES OK]"));
        assert!(line.contains("Show B: single language: [🇬🇧 eng]"));
    }

    #[test]
    fn test_render_coverage_lines() {
        let wanted = BTreeSet::from(["eng".to_string()]);

        let partial = Finding::SeasonPartial {
            series: "Show A".to_string(),
            season: 3,
            total: 8,
            supported: 7,
            wanted: wanted.clone(),
        };
        let line = render_finding(&partial);
        assert!(line.contains("[⚠️  PARTIAL COVERAGE]"));
        assert!(line.contains("Show A - Season 3: 7/8 episodes in wanted languages [🇬🇧 eng]"));

        let unsupported = Finding::SeasonUnsupported {
            series: "Show A".to_string(),
            season: 4,
            total: 5,
            supported: 0,
            wanted,
        };
        assert!(render_finding(&unsupported).contains("[⛔ NO COVERAGE]"));
    }

    #[test]
    fn test_series_are_separated_by_blank_lines() {
        let findings = vec![
            Finding::UniformSeries {
                series: "Show A".to_string(),
                language: "eng".to_string(),
            },
            Finding::UniformSeries {
                series: "Show B".to_string(),
                language: "ita".to_string(),
            },
        ];

        let report = render_console(&findings);
        let blank_lines = report.matches("\n\n").count();
        assert_eq!(blank_lines, 1);
    }
}
