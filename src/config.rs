use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub site_url: String,

    // Server
    pub port: u16,
    pub static_dir: Option<PathBuf>,

    // Locale routing
    pub negotiate_redirects: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "https://jernadigital.com".to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(site_url.starts_with("https://") || site_url.starts_with("http://")) {
            bail!("SITE_URL must be an http(s) origin, got '{}'", site_url);
        }

        Ok(Self {
            site_url,

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            static_dir: std::env::var("STATIC_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            negotiate_redirects: std::env::var("NEGOTIATE_REDIRECTS")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        })
    }
}
