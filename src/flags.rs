//! Flag emoji lookup for console output.

/// Returns the flag emoji for a single normalized language code.
///
/// Codes without a known flag get the white flag.
pub fn flag(code: &str) -> &'static str {
    match code {
        "ita" => "🇮🇹",
        "eng" => "🇬🇧",
        "jpn" => "🇯🇵",
        "und" => "❓",
        "fre" => "🇫🇷",
        "spa" => "🇪🇸",
        "deu" => "🇩🇪",
        "por" => "🇵🇹",
        "rus" => "🇷🇺",
        "zho" => "🇨🇳",
        _ => "🏳️",
    }
}

/// Returns the flags for a possibly combined language code, one flag per
/// `/`-separated token.
pub fn flags_for(code: &str) -> String {
    code.split('/').map(flag).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_lookup() {
        assert_eq!(flag("ita"), "🇮🇹");
        assert_eq!(flag("und"), "❓");
        assert_eq!(flag("xyz"), "🏳️");
    }

    #[test]
    fn test_flags_for_combined_code() {
        assert_eq!(flags_for("eng/ita"), "🇬🇧 🇮🇹");
        assert_eq!(flags_for("eng"), "🇬🇧");
    }
}
