//! Locale-prefixed URL paths.
//!
//! The default language lives at the unprefixed route (`/about`); every other
//! language lives under `/<code>` (`/es/about`, and `/es` for the root).

use crate::i18n::{Language, LanguageRegistry};
use serde::Serialize;
use std::borrow::Cow;

/// One entry of the alternate-language URL set for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateUrl {
    pub lang: Language,
    pub hreflang: &'static str,
    pub url: String,
}

fn with_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}

/// Remove one leading language prefix, yielding the language-neutral route.
///
/// A bare segment is normalized by prefixing `/`, and an empty result becomes
/// `/`. Segments that merely start with a code (`/essays`) are kept intact.
pub fn strip_language_prefix(path: &str) -> String {
    let normalized = with_leading_slash(path);

    let stripped = match LanguageRegistry::get()
        .prefix_matcher()
        .captures(&normalized)
        .and_then(|caps| caps.get(1))
    {
        Some(code) => &normalized[code.end()..],
        None => &normalized[..],
    };

    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Build the path at which `route` is served in `lang`.
///
/// Any language prefix already present on `route` is replaced, so the output
/// never carries two prefixes and the default language never carries one.
pub fn localized_path(lang: Language, route: &str) -> String {
    let canonical = strip_language_prefix(route);

    if lang.is_default() {
        canonical
    } else if canonical == "/" {
        format!("/{}", lang.code())
    } else {
        format!("/{}{}", lang.code(), canonical)
    }
}

/// Determine the language a path is served in.
///
/// Only the first segment is inspected; paths without a supported prefix are
/// in the default language.
pub fn language_from_path(path: &str) -> Language {
    let normalized = with_leading_slash(path);

    LanguageRegistry::get()
        .prefix_matcher()
        .captures(&normalized)
        .and_then(|caps| caps.get(1))
        .and_then(|code| LanguageRegistry::get().get_by_code(code.as_str()))
        .unwrap_or(Language::DEFAULT)
}

/// Compute the URL of the current page in every supported language.
///
/// Entries follow declaration order of `Language::ALL`. A trailing `/` on
/// `site_origin` is dropped so URLs never contain `//` after the host.
pub fn alternate_urls(current_path: &str, site_origin: &str) -> Vec<AlternateUrl> {
    let base = site_origin.trim_end_matches('/');
    let route = strip_language_prefix(current_path);

    Language::ALL
        .iter()
        .map(|&lang| AlternateUrl {
            lang,
            hreflang: lang.hreflang(),
            url: format!("{}{}", base, localized_path(lang, &route)),
        })
        .collect()
}

/// URL for the `x-default` alternate: the page in the default language.
pub fn x_default_url(current_path: &str, site_origin: &str) -> String {
    format!(
        "{}{}",
        site_origin.trim_end_matches('/'),
        localized_path(Language::DEFAULT, current_path)
    )
}
