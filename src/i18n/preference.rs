//! Persisted language preference.
//!
//! The preference lives in an injected key-value store so the same logic runs
//! against browser-like storage, cookies or a file on disk. Storage failures
//! never reach the caller: an unreadable store behaves as "no preference".

use crate::i18n::negotiation::resolve_preferred_language;
use crate::i18n::paths::localized_path;
use crate::i18n::Language;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key holding the preferred language code.
pub const LANGUAGE_STORAGE_KEY: &str = "jerna-lang";

/// Errors raised by a `PreferenceStore`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,

    #[error("preference storage lock was poisoned")]
    Poisoned,

    #[error("failed to access preference file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {} is not a valid JSON object: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal string key-value storage, modeled on browser `localStorage`.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

// ==================== In-Memory Store ====================

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one item.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self {
            items: Mutex::new(items),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}

// ==================== Unavailable Store ====================

/// Store that rejects every operation, like blocked or disabled storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// ==================== File Store ====================

/// Store persisted as a flat JSON object in a single file.
///
/// A missing file is an empty store. Every write replaces the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<HashMap<String, String>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_items(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(items).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        std::fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        if items.remove(key).is_some() {
            self.write_items(&items)?;
        }
        Ok(())
    }
}

// ==================== Language Preference ====================

/// Outcome of negotiating a visitor's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negotiated {
    pub language: Language,
    /// True when nothing was stored and the negotiated language was saved.
    /// Stays false when the store rejected the write.
    pub remembered: bool,
}

/// Reads and writes the visitor's language under `LANGUAGE_STORAGE_KEY`.
#[derive(Debug)]
pub struct LanguagePreference<S> {
    store: S,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the stored language preference.
    ///
    /// Returns `None` when nothing is stored or the store cannot be read. A
    /// stored value that is not a supported code is removed and ignored.
    pub fn get_stored_language(&self) -> Option<Language> {
        let value = match self.store.get_item(LANGUAGE_STORAGE_KEY) {
            Ok(value) => value?,
            Err(e) => {
                debug!("Language preference not readable: {}", e);
                return None;
            }
        };

        match Language::from_code(&value) {
            Ok(lang) => Some(lang),
            Err(e) => {
                warn!("Ignoring stored language preference: {}", e);
                if let Err(e) = self.store.remove_item(LANGUAGE_STORAGE_KEY) {
                    debug!("Could not clear invalid language preference: {}", e);
                }
                None
            }
        }
    }

    /// Store the language preference. Failures are logged and swallowed.
    pub fn set_stored_language(&self, lang: Language) {
        self.save(lang);
    }

    fn save(&self, lang: Language) -> bool {
        match self.store.set_item(LANGUAGE_STORAGE_KEY, lang.code()) {
            Ok(()) => true,
            Err(e) => {
                debug!("Language preference not saved: {}", e);
                false
            }
        }
    }

    /// Stored preference, then browser languages, then the default.
    pub fn preferred_language<T: AsRef<str>>(&self, browser_languages: &[T]) -> Language {
        resolve_preferred_language(self.get_stored_language(), browser_languages)
    }

    /// Like `preferred_language`, but saves the result when nothing was stored.
    pub fn negotiate<T: AsRef<str>>(&self, browser_languages: &[T]) -> Negotiated {
        if let Some(language) = self.get_stored_language() {
            return Negotiated {
                language,
                remembered: false,
            };
        }

        let language = resolve_preferred_language(None, browser_languages);
        Negotiated {
            language,
            remembered: self.save(language),
        }
    }

    /// Record an explicit language choice and return the current page's path
    /// in that language.
    pub fn switch_language(&self, lang: Language, current_path: &str) -> String {
        self.set_stored_language(lang);
        localized_path(lang, current_path)
    }
}
