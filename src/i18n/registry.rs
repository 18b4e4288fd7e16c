//! Language registry: Single source of truth for locale metadata.
//!
//! Every supported language owns exactly one `LocaleMetadata` record. The
//! registry derives the path-prefix matcher from `Language::ALL`, so adding a
//! language variant updates prefix stripping and detection together.

use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;

/// Metadata for a supported language.
///
/// Contains the codes used in URLs, SEO tags and social-preview metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMetadata {
    /// ISO 639-1 language code used as the URL prefix (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language, shown in the language switcher
    pub native_name: &'static str,

    /// Value of the `hreflang` attribute on alternate links
    pub hreflang: &'static str,

    /// Region-qualified locale for Open Graph metadata (e.g., "en_US")
    pub locale: &'static str,

    /// BCP 47 locale used in the sitemap (e.g., "en-US")
    pub sitemap_locale: &'static str,

    /// Whether this language is served without a URL prefix (only one should be true)
    pub is_default: bool,
}

pub(crate) const ENGLISH_METADATA: LocaleMetadata = LocaleMetadata {
    code: "en",
    name: "English",
    native_name: "English",
    hreflang: "en",
    locale: "en_US",
    sitemap_locale: "en-US",
    is_default: true,
};

pub(crate) const SPANISH_METADATA: LocaleMetadata = LocaleMetadata {
    code: "es",
    name: "Spanish",
    native_name: "Español",
    hreflang: "es",
    locale: "es_ES",
    sitemap_locale: "es-ES",
    is_default: false,
};

/// Global language registry singleton.
///
/// Holds the compiled prefix matcher. It's initialized once on first access
/// and remains immutable thereafter.
pub struct LanguageRegistry {
    prefix_matcher: Regex,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            prefix_matcher: build_prefix_matcher(),
        })
    }

    /// Look up a supported language by its exact code.
    ///
    /// # Returns
    /// * `Some(Language)` if the code names a supported language
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Matcher for a leading `/<code>` segment.
    ///
    /// Capture group 1 holds the code. The segment must be followed by `/` or
    /// the end of the path, so `/essays` does not match `es`.
    pub fn prefix_matcher(&self) -> &Regex {
        &self.prefix_matcher
    }
}

fn build_prefix_matcher() -> Regex {
    let alternatives = Language::ALL
        .iter()
        .map(|lang| regex::escape(lang.code()))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("^/({})(?:/|$)", alternatives))
        .expect("language codes always form a valid pattern")
}
