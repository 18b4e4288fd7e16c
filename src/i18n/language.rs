//! Language type: Closed set of supported site languages.
//!
//! `Language` is an enum so that "is this language supported" is answered by
//! the type system. Arbitrary strings enter through `Language::from_code`,
//! which rejects anything outside the set.

use crate::i18n::registry::{LocaleMetadata, ENGLISH_METADATA, SPANISH_METADATA};
use crate::i18n::strings::{SiteStrings, ENGLISH_STRINGS, SPANISH_STRINGS};
use crate::i18n::LanguageRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English, served at unprefixed paths
    #[serde(rename = "en")]
    English,

    /// Spanish, served under `/es`
    #[serde(rename = "es")]
    Spanish,
}

/// Error returned when a string does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unsupported(String),
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// The language served without a URL prefix.
    pub const DEFAULT: Language = Language::English;

    /// Create a Language from a language code string.
    ///
    /// Surrounding whitespace is ignored and the code is matched
    /// case-insensitively.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code names a supported language
    /// * `Err(LanguageError::Unsupported)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        let normalized = code.trim().to_ascii_lowercase();

        LanguageRegistry::get()
            .get_by_code(&normalized)
            .ok_or_else(|| LanguageError::Unsupported(code.to_string()))
    }

    /// Like `from_code`, but falls back to the default language.
    pub fn from_code_or_default(code: &str) -> Language {
        Self::from_code(code).unwrap_or_else(|err| {
            debug!("{}, using {}", err, Language::DEFAULT);
            Language::DEFAULT
        })
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.metadata().code
    }

    /// Get the locale metadata record for this language.
    pub fn metadata(&self) -> &'static LocaleMetadata {
        match self {
            Language::English => &ENGLISH_METADATA,
            Language::Spanish => &SPANISH_METADATA,
        }
    }

    /// Get the translated site strings for this language.
    pub fn strings(&self) -> &'static SiteStrings {
        match self {
            Language::English => &ENGLISH_STRINGS,
            Language::Spanish => &SPANISH_STRINGS,
        }
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    /// Get the native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.metadata().native_name
    }

    /// Get the `hreflang` code for alternate links.
    pub fn hreflang(&self) -> &'static str {
        self.metadata().hreflang
    }

    /// Get the region-qualified locale used by Open Graph (e.g., "es_ES").
    pub fn locale(&self) -> &'static str {
        self.metadata().locale
    }

    /// Check if this is the default (unprefixed) language.
    pub fn is_default(&self) -> bool {
        *self == Language::DEFAULT
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
