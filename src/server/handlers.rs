use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use tracing::error;

use crate::encoding::LegendEntry;
use crate::html_template::{get_map_html, Asset};
use crate::marker::VisualMarker;
use crate::presenter::MapComposition;

use super::state::AppState;

pub async fn index_html() -> Result<Html<String>, StatusCode> {
    get_map_html().map_err(|e| {
        error!("Failed to render map page: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn embedded(name: &str, content_type: &'static str) -> Result<Response, StatusCode> {
    let content = Asset::get(name).ok_or(StatusCode::NOT_FOUND)?.data;
    Ok(([(header::CONTENT_TYPE, content_type)], content.into_owned()).into_response())
}

pub async fn style_css() -> Result<Response, StatusCode> {
    embedded("style.css", "text/css")
}

pub async fn script_js() -> Result<Response, StatusCode> {
    embedded("script.js", "application/javascript")
}

// HTTP API Handlers
pub async fn get_map(State(state): State<AppState>) -> Json<MapComposition> {
    Json(state.map.as_ref().clone())
}

pub async fn get_earthquakes(State(state): State<AppState>) -> Json<Vec<VisualMarker>> {
    Json(state.map.overlay.markers.clone())
}

pub async fn get_legend(State(state): State<AppState>) -> Json<Vec<LegendEntry>> {
    Json(state.map.legend.entries.clone())
}
