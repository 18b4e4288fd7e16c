use anyhow::{Context, Result};
use jerna_locale::config::Config;
use jerna_locale::server::{self, AppState};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jerna_locale=info".parse()?),
        )
        .init();

    info!("Starting locale edge service");

    // Load configuration from environment
    let config = Config::from_env()?;
    match &config.static_dir {
        Some(dir) => info!("Serving static files from {}", dir.display()),
        None => info!("STATIC_DIR not set, unmatched paths return 404"),
    }
    if !config.negotiate_redirects {
        info!("Preference redirects disabled");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = server::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
