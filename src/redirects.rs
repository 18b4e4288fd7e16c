//! Static redirect rules for URLs that moved.
//!
//! English pages used to live under `/en`; they are now served unprefixed.

/// A fixed source → destination rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub from: &'static str,
    pub to: &'static str,
    pub status: u16,
}

/// Old default-language URLs carried the `/en` prefix; the default language is
/// now unprefixed, so these rules point from prefixed to unprefixed paths.
const LEGACY_REDIRECTS: &[Redirect] = &[
    Redirect { from: "/en", to: "/", status: 301 },
    Redirect { from: "/en/about", to: "/about", status: 301 },
    Redirect { from: "/en/services", to: "/services", status: 301 },
    Redirect { from: "/en/case-studies", to: "/case-studies", status: 301 },
    Redirect { from: "/en/contact", to: "/contact", status: 301 },
];

/// Lookup table of redirect rules.
#[derive(Debug, Clone)]
pub struct RedirectTable {
    entries: Vec<Redirect>,
}

impl RedirectTable {
    pub fn new(entries: Vec<Redirect>) -> Self {
        Self { entries }
    }

    /// The legacy `/en/*` rules.
    pub fn legacy() -> Self {
        Self::new(LEGACY_REDIRECTS.to_vec())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn entries(&self) -> &[Redirect] {
        &self.entries
    }

    /// Find the rule for `path`, ignoring one trailing `/`.
    pub fn lookup(&self, path: &str) -> Option<&Redirect> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };

        self.entries.iter().find(|entry| entry.from == normalized)
    }
}

impl Default for RedirectTable {
    fn default() -> Self {
        Self::legacy()
    }
}
