//! Header navigation and language switcher entries.

use crate::i18n::{language_from_path, localized_path, Language};
use crate::routes::Route;
use serde::Serialize;

/// A header navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    pub href: String,
}

/// An entry of the language switcher for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub lang: Language,
    /// Native language name
    pub label: &'static str,
    /// The current page in this language
    pub href: String,
    /// Link that records this language as the visitor's choice, then
    /// redirects to `href`
    pub switch_href: String,
    pub active: bool,
}

/// The language switcher, labelled in the current page's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSwitcher {
    pub label: &'static str,
    pub aria_label: &'static str,
    pub options: Vec<LanguageOption>,
}

/// Navigation links for every page, pointing at `lang`'s paths.
pub fn nav_links(lang: Language) -> Vec<NavLink> {
    Route::ALL
        .into_iter()
        .map(|route| NavLink {
            route,
            label: route.label(lang),
            href: route.localized(lang),
        })
        .collect()
}

/// Switcher options for the page at `current_path`.
pub fn language_options(current_path: &str) -> Vec<LanguageOption> {
    let current = language_from_path(current_path);

    Language::ALL
        .into_iter()
        .map(|lang| LanguageOption {
            lang,
            label: lang.native_name(),
            href: localized_path(lang, current_path),
            switch_href: switch_href(lang, current_path),
            active: lang == current,
        })
        .collect()
}

/// The switcher for the page at `current_path`.
pub fn language_switcher(current_path: &str) -> LanguageSwitcher {
    let strings = language_from_path(current_path).strings();

    LanguageSwitcher {
        label: strings.language_label,
        aria_label: strings.select_language,
        options: language_options(current_path),
    }
}

fn switch_href(lang: Language, current_path: &str) -> String {
    format!("/lang/{}?path={}", lang.code(), urlencoding::encode(current_path))
}
