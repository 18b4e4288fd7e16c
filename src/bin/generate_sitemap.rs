//! Write the multilingual sitemap for the static build.
//!
//! Usage:
//!   cargo run --bin sitemap
//!
//! Optional:
//! - SITE_URL (defaults to https://jernadigital.com)
//! - SITEMAP_OUTPUT (defaults to dist/sitemap.xml)

use anyhow::{Context, Result};
use jerna_locale::{config::Config, seo};
use std::fs;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sitemap=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let output_path = PathBuf::from(
        std::env::var("SITEMAP_OUTPUT").unwrap_or_else(|_| "dist/sitemap.xml".to_string()),
    );

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let xml = seo::sitemap_xml(&config.site_url);
    fs::write(&output_path, &xml).context("Failed to write sitemap to file")?;

    info!(
        "✓ Wrote {} URLs for {} to {}",
        xml.matches("<url>").count(),
        config.site_url,
        output_path.display()
    );

    Ok(())
}
