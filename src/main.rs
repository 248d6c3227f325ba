use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Import modules
mod constants;
mod encoding;
mod error;
mod feed;
mod html_template;
mod marker;
mod orchestrator;
mod presenter;
mod server;
mod settings;
mod utils;

use presenter::MapComposition;
use server::AppState;
use settings::Settings;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quakemap=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Writes the map as one standalone HTML file
async fn export_map(map: &MapComposition, path: &Path) -> Result<()> {
    let html = html_template::render_standalone_page(map)?;
    utils::ensure_parent_exists(path)
        .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("💾 Map exported to {}", path.display());
    Ok(())
}

async fn serve_map(map: MapComposition, settings: &Settings) -> Result<()> {
    let listener = server::bind(settings.port).await?;

    if settings.auto_open_browser {
        let url = format!("http://127.0.0.1:{}", settings.port);
        if let Err(e) = utils::open_browser(&url) {
            warn!("⚠️  Could not open browser: {}", e);
        }
    }

    server::serve(listener, AppState::new(map)).await
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    info!("🗺️  QuakeMap v{} starting...", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    let config_path = Settings::config_path();
    if config_path.exists() {
        info!("⚙️  Config: {}", config_path.display());
    } else if let Err(e) = settings.save() {
        warn!("⚠️  Could not write default config to {}: {:#}", config_path.display(), e);
    } else {
        info!("⚙️  Default config written to {}", config_path.display());
    }

    // A failed fetch has already been logged; there is no map to show
    let Some(map) = orchestrator::run_http(&settings.feed_url).await else {
        return Ok(());
    };

    match settings.export_html {
        Some(ref path) => export_map(&map, Path::new(path)).await,
        None => serve_map(map, &settings).await,
    }
}
