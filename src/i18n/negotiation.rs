//! Language negotiation: stored preference, then browser languages, then default.

use crate::i18n::Language;
use std::cmp::Ordering;

/// Pick the first browser language tag whose primary subtag is supported.
///
/// Tags are consulted in order (most preferred first). The primary subtag is
/// everything before the first `-` or `_`, compared case-insensitively, so
/// `es-MX` and `ES_es` both select Spanish.
pub fn detect_browser_language<S: AsRef<str>>(accepted_languages: &[S]) -> Language {
    accepted_languages
        .iter()
        .find_map(|tag| {
            let primary = tag
                .as_ref()
                .trim()
                .split(|c: char| c == '-' || c == '_')
                .next()
                .unwrap_or("");
            Language::from_code(primary).ok()
        })
        .unwrap_or(Language::DEFAULT)
}

/// Parse an HTTP `Accept-Language` header into tags, most preferred first.
///
/// Entries are ordered by descending `q` weight, keeping header order among
/// equal weights. Entries with `q=0`, an unparseable weight, or the `*`
/// wildcard are dropped.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let mut quality = 1.0_f32;
            for param in parts {
                let param = param.trim();
                if let Some(value) = param.strip_prefix("q=").or_else(|| param.strip_prefix("Q=")) {
                    quality = value.trim().parse().unwrap_or(0.0);
                }
            }

            (quality > 0.0).then(|| (tag.to_string(), quality))
        })
        .collect();

    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Resolve which language a visitor prefers.
///
/// A stored preference always wins; otherwise the browser languages are
/// negotiated, falling back to the default language.
pub fn resolve_preferred_language<S: AsRef<str>>(
    stored: Option<Language>,
    browser_languages: &[S],
) -> Language {
    stored.unwrap_or_else(|| detect_browser_language(browser_languages))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    // ==================== detect_browser_language Tests ====================

    #[test]
    fn test_detect_exact_code() {
        assert_eq!(detect_browser_language(&["es"]), Language::Spanish);
    }

    #[test]
    fn test_detect_region_qualified() {
        assert_eq!(detect_browser_language(&["es-ES", "en-US"]), Language::Spanish);
        assert_eq!(detect_browser_language(&["en-GB", "es"]), Language::English);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect_browser_language(&["ES-mx"]), Language::Spanish);
        assert_eq!(detect_browser_language(&["es_AR"]), Language::Spanish);
    }

    #[test]
    fn test_detect_skips_unsupported_tags() {
        assert_eq!(
            detect_browser_language(&["fr-FR", "de", "es-CL"]),
            Language::Spanish
        );
    }

    #[test]
    fn test_detect_falls_back_to_default() {
        assert_eq!(detect_browser_language(&["fr-FR"]), Language::DEFAULT);
        assert_eq!(detect_browser_language(&NONE), Language::DEFAULT);
        assert_eq!(detect_browser_language(&["", "-", "*"]), Language::DEFAULT);
    }

    #[test]
    fn test_detect_accepts_owned_strings() {
        let tags = vec!["pt-BR".to_string(), "es".to_string()];
        assert_eq!(detect_browser_language(&tags), Language::Spanish);
    }

    // ==================== parse_accept_language Tests ====================

    #[test]
    fn test_parse_orders_by_quality() {
        assert_eq!(
            parse_accept_language("en-US;q=0.5, es-ES, fr;q=0.8"),
            vec!["es-ES", "fr", "en-US"]
        );
    }

    #[test]
    fn test_parse_keeps_header_order_for_ties() {
        assert_eq!(
            parse_accept_language("es-ES,es;q=0.9,en;q=0.9"),
            vec!["es-ES", "es", "en"]
        );
    }

    #[test]
    fn test_parse_drops_zero_wildcard_and_malformed() {
        assert_eq!(
            parse_accept_language("fr;q=0, *;q=0.1, de;q=abc, es"),
            vec!["es"]
        );
    }

    #[test]
    fn test_parse_empty_header() {
        assert!(parse_accept_language("").is_empty());
        assert!(parse_accept_language(" , ;q=1").is_empty());
    }

    #[test]
    fn test_parse_then_detect() {
        let tags = parse_accept_language("fr-CH, fr;q=0.9, es;q=0.8, en;q=0.7");
        assert_eq!(detect_browser_language(&tags), Language::Spanish);
    }

    // ==================== resolve_preferred_language Tests ====================

    #[test]
    fn test_stored_preference_wins() {
        assert_eq!(
            resolve_preferred_language(Some(Language::Spanish), &["fr-FR"]),
            Language::Spanish
        );
        assert_eq!(
            resolve_preferred_language(Some(Language::English), &["es-ES"]),
            Language::English
        );
    }

    #[test]
    fn test_browser_used_without_stored_preference() {
        assert_eq!(
            resolve_preferred_language(None, &["es-ES", "en-US"]),
            Language::Spanish
        );
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(resolve_preferred_language(None, &["fr-FR"]), Language::DEFAULT);
        assert_eq!(resolve_preferred_language(None, &NONE), Language::DEFAULT);
    }
}
