//! Locale routing for the Jerna Digital website.
//!
//! English pages are served at unprefixed paths and Spanish pages under
//! `/es`. This crate decides which language a request renders in, builds
//! localized and alternate URLs, remembers the visitor's choice, and runs a
//! small edge service applying those rules in front of the static site.

pub mod config;
pub mod i18n;
pub mod navigation;
pub mod redirects;
pub mod routes;
pub mod seo;
pub mod server;
