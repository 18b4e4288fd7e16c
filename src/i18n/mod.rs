//! Internationalization (i18n) module: locale routing and preference negotiation.
//!
//! All language-related logic is contained here: which languages exist, how
//! their URLs are shaped, how a visitor's language is chosen and remembered.
//!
//! # Architecture
//!
//! - `registry`: Locale metadata table and the derived path-prefix matcher
//! - `language`: Closed `Language` enum and parsing from codes
//! - `paths`: Prefix stripping, localized paths and alternate URLs
//! - `negotiation`: Browser-language detection and preference precedence
//! - `preference`: Injected key-value storage for the visitor's choice
//! - `strings`: Translated site strings
//!
//! # Example
//!
//! ```rust
//! use jerna_locale::i18n::{language_from_path, localized_path, Language};
//!
//! assert_eq!(localized_path(Language::Spanish, "/about"), "/es/about");
//! assert_eq!(language_from_path("/es/services"), Language::Spanish);
//! assert_eq!(language_from_path("/essays"), Language::English);
//! ```

mod language;
mod negotiation;
mod paths;
mod preference;
mod registry;
mod strings;

pub use language::{Language, LanguageError};
pub use negotiation::{detect_browser_language, parse_accept_language, resolve_preferred_language};
pub use paths::{
    alternate_urls, language_from_path, localized_path, strip_language_prefix, x_default_url,
    AlternateUrl,
};
pub use preference::{
    FileStore, LanguagePreference, MemoryStore, Negotiated, PreferenceStore, StorageError,
    UnavailableStore, LANGUAGE_STORAGE_KEY,
};
pub use registry::{LanguageRegistry, LocaleMetadata};
pub use strings::SiteStrings;
