use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use tracing::info;

pub mod handlers;
pub mod state;

pub use self::state::AppState;
use handlers::{get_earthquakes, get_legend, get_map, index_html, script_js, style_css};

// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_html))
        .route("/style.css", get(style_css))
        .route("/script.js", get(script_js))
        .route("/api/map", get(get_map))
        .route("/api/earthquakes", get(get_earthquakes))
        .route("/api/legend", get(get_legend))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let markers = state.map.overlay.markers.len();
    let app = create_app(state);

    info!("   ✅ HTTP server started at http://{}", listener.local_addr()?);
    info!("   🗺️  {} earthquakes on the map", markers);
    info!("   📡 API endpoints:");
    info!("      - GET /api/map - Full map composition");
    info!("      - GET /api/earthquakes - Earthquake markers");
    info!("      - GET /api/legend - Depth legend");

    axum::serve(listener, app).await?;
    Ok(())
}
