use crate::i18n::{localized_path, strip_language_prefix, Language};
use serde::Serialize;

/// A page of the site, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    About,
    Services,
    CaseStudies,
    Contact,
}

impl Route {
    /// Every page, in navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::CaseStudies,
        Route::Contact,
    ];

    /// The unprefixed path of this page.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::CaseStudies => "/case-studies",
            Route::Contact => "/contact",
        }
    }

    /// Match a path (localized or not, with or without a trailing `/`) to a page.
    pub fn from_path(path: &str) -> Option<Route> {
        let route = strip_language_prefix(path);
        let trimmed = match route.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// The path of this page in `lang`.
    pub fn localized(&self, lang: Language) -> String {
        localized_path(lang, self.path())
    }

    /// The navigation label of this page in `lang`.
    pub fn label(&self, lang: Language) -> &'static str {
        let strings = lang.strings();
        match self {
            Route::Home => strings.nav_home,
            Route::About => strings.nav_about,
            Route::Services => strings.nav_services,
            Route::CaseStudies => strings.nav_case_studies,
            Route::Contact => strings.nav_contact,
        }
    }
}
