//! Language tag normalization
//!
//! Sonarr records audio languages as free-form strings ("ENG", "Ita / eng",
//! "Japanese"), depending on which analyzer wrote the media info. This module
//! canonicalizes those tags into a single comparable form so that counts for
//! the same language always land on the same key.

use std::collections::BTreeSet;

/// Reserved code for an undetermined or unknown audio language.
pub const UNDETERMINED: &str = "und";

/// Resolves common two-letter codes and plain-English spellings to their
/// canonical three-letter form. Unrecognized tokens pass through unchanged,
/// so codes outside this table still compare consistently against themselves.
fn resolve_alias(token: &str) -> &str {
    match token {
        "en" | "english" => "eng",
        "it" | "italian" => "ita",
        "ja" | "jp" | "japanese" => "jpn",
        "fr" | "fra" | "french" => "fre",
        "es" | "spanish" => "spa",
        "de" | "ger" | "german" => "deu",
        "pt" | "portuguese" => "por",
        "ru" | "russian" => "rus",
        "zh" | "chi" | "chinese" => "zho",
        "unknown" | "undetermined" | "unk" => UNDETERMINED,
        other => other,
    }
}

/// Normalizes a raw audio-language tag into a canonical language code.
///
/// The input may name several languages separated by `/`. Each token is
/// trimmed, lower-cased and alias-resolved; the result is deduplicated,
/// sorted and joined with `/` again. Two tags naming the same languages in
/// any casing, spacing or order therefore normalize identically:
///
/// ```
/// use language_patrol::normalize;
///
/// assert_eq!(normalize("ENG / Ita"), "eng/ita");
/// assert_eq!(normalize("ita/eng"), "eng/ita");
/// assert_eq!(normalize(""), "und");
/// ```
///
/// This function is total: it never fails, and anything unusable degrades to
/// [`UNDETERMINED`].
pub fn normalize(raw: &str) -> String {
    let tokens: BTreeSet<String> = raw
        .split('/')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .map(|token| resolve_alias(&token).to_string())
        .collect();

    if tokens.is_empty() {
        UNDETERMINED.to_string()
    } else {
        tokens.into_iter().collect::<Vec<_>>().join("/")
    }
}

/// Parses a comma-separated list of wanted languages into a set of single
/// canonical tokens.
///
/// Each item goes through [`normalize`], and multi-token results are split
/// apart again, so a caller writing `ita/eng` as one item still ends up with
/// two independent wanted tokens. Blank input yields an empty set, which
/// downstream means "no wanted-language policy" rather than "match nothing".
pub fn parse_wanted_languages(csv: &str) -> BTreeSet<String> {
    let mut wanted = BTreeSet::new();

    for item in csv.split(',') {
        if item.trim().is_empty() {
            continue;
        }

        for token in normalize(item).split('/') {
            wanted.insert(token.to_string());
        }
    }

    wanted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_single_token() {
        assert_eq!(normalize("ita"), "ita");
        assert_eq!(normalize("ENG"), "eng");
        assert_eq!(normalize("  jpn  "), "jpn");
    }

    #[test]
    fn test_normalize_resolves_aliases() {
        assert_eq!(normalize("en"), "eng");
        assert_eq!(normalize("Italian"), "ita");
        assert_eq!(normalize("ja"), "jpn");
        assert_eq!(normalize("fra"), "fre");
        assert_eq!(normalize("ger"), "deu");
        assert_eq!(normalize("chi"), "zho");
        assert_eq!(normalize("Unknown"), "und");
        assert_eq!(normalize("undetermined"), "und");
    }

    #[test]
    fn test_normalize_is_order_insensitive() {
        assert_eq!(normalize("ENG / Ita"), "eng/ita");
        assert_eq!(normalize("ita/eng"), "eng/ita");
        assert_eq!(normalize("jpn / en / ita"), "eng/ita/jpn");
    }

    #[test]
    fn test_normalize_deduplicates() {
        assert_eq!(normalize("eng/eng"), "eng");
        // Aliases collapse onto the same canonical token
        assert_eq!(normalize("en/English/eng"), "eng");
    }

    #[test]
    fn test_normalize_empty_input_is_undetermined() {
        assert_eq!(normalize(""), "und");
        assert_eq!(normalize("   "), "und");
        assert_eq!(normalize(" / "), "und");
    }

    #[test]
    fn test_normalize_passes_unrecognized_codes_through() {
        assert_eq!(normalize("kor"), "kor");
        assert_eq!(normalize("XYZ"), "xyz");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["ENG / Ita", "", "Unknown", "kor", "jpn / en / ita"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_parse_wanted_languages_basic() {
        let wanted = parse_wanted_languages("ita, ENG");
        assert_eq!(wanted, BTreeSet::from(["eng".to_string(), "ita".to_string()]));
    }

    #[test]
    fn test_parse_wanted_languages_splits_combined_items() {
        let wanted = parse_wanted_languages("ita/eng");
        assert_eq!(wanted, BTreeSet::from(["eng".to_string(), "ita".to_string()]));
    }

    #[test]
    fn test_parse_wanted_languages_blank_input_is_empty() {
        assert!(parse_wanted_languages("").is_empty());
        assert!(parse_wanted_languages("  ,  ,").is_empty());
    }

    #[test]
    fn test_parse_wanted_languages_resolves_aliases() {
        let wanted = parse_wanted_languages("Japanese, en");
        assert_eq!(wanted, BTreeSet::from(["eng".to_string(), "jpn".to_string()]));
    }
}
