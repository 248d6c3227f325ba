//! Declarative description of the map handed to the browser.
//!
//! Nothing here touches Leaflet directly: `frontend/script.js` reads a
//! serialized [`MapComposition`] and creates the tile layers, circle markers,
//! layer control and legend from it.

use serde::Serialize;

use crate::constants::{
    LEGEND_POSITION, LEGEND_TITLE, MAP_CENTER, MAP_CONTAINER_ID, MAP_ZOOM, OVERLAY_NAME,
    STREET_ATTRIBUTION, STREET_LAYER_NAME, STREET_TILE_URL, TOPO_ATTRIBUTION, TOPO_LAYER_NAME,
    TOPO_TILE_URL,
};
use crate::encoding::{legend_entries, LegendEntry};
use crate::feed::FeedMetadata;
use crate::html_template::render_legend_html;
use crate::marker::{LatLng, MarkerStyle, VisualMarker};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseLayer {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub active: bool,
}

/// All earthquake markers, toggled as one layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeOverlay {
    pub name: &'static str,
    pub active: bool,
    pub style: MarkerStyle,
    pub markers: Vec<VisualMarker>,
}

impl EarthquakeOverlay {
    pub fn new(markers: Vec<VisualMarker>) -> Self {
        Self {
            name: OVERLAY_NAME,
            active: true,
            style: MarkerStyle::default(),
            markers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
    /// Ready-to-insert contents of the legend control
    pub html: String,
}

impl Legend {
    pub fn depth() -> Self {
        let entries = legend_entries();
        let html = render_legend_html(LEGEND_TITLE, &entries);
        Self {
            position: LEGEND_POSITION,
            title: LEGEND_TITLE,
            entries,
            html,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapComposition {
    pub container_id: &'static str,
    pub center: LatLng,
    pub zoom: u8,
    pub base_layers: Vec<BaseLayer>,
    pub overlay: EarthquakeOverlay,
    pub layer_control: LayerControl,
    pub legend: Legend,
    pub feed: FeedMetadata,
}

pub fn base_layers() -> Vec<BaseLayer> {
    vec![
        BaseLayer {
            name: STREET_LAYER_NAME,
            url_template: STREET_TILE_URL,
            attribution: STREET_ATTRIBUTION,
            active: true,
        },
        BaseLayer {
            name: TOPO_LAYER_NAME,
            url_template: TOPO_TILE_URL,
            attribution: TOPO_ATTRIBUTION,
            active: false,
        },
    ]
}

/// Composes the full map around an earthquake overlay.
pub fn compose(overlay: EarthquakeOverlay, feed: FeedMetadata) -> MapComposition {
    MapComposition {
        container_id: MAP_CONTAINER_ID,
        center: LatLng {
            lat: MAP_CENTER.0,
            lng: MAP_CENTER.1,
        },
        zoom: MAP_ZOOM,
        base_layers: base_layers(),
        overlay,
        layer_control: LayerControl { collapsed: false },
        legend: Legend::depth(),
        feed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::DepthColor;

    #[test]
    fn test_compose_defaults() {
        let map = compose(EarthquakeOverlay::new(Vec::new()), FeedMetadata::default());

        assert_eq!(map.container_id, "map");
        assert_eq!(map.center, LatLng { lat: 37.09, lng: -95.71 });
        assert_eq!(map.zoom, 5);
        assert!(!map.layer_control.collapsed);
        assert_eq!(map.legend.position, "bottomright");
        assert_eq!(map.overlay.name, "Earthquakes");
        assert!(map.overlay.active);
    }

    #[test]
    fn test_only_street_layer_starts_active() {
        let layers = base_layers();
        assert_eq!(layers.len(), 2);

        let active: Vec<&str> = layers.iter().filter(|l| l.active).map(|l| l.name).collect();
        assert_eq!(active, vec!["Street Map"]);
        assert!(layers[1].url_template.contains("opentopomap"));
        assert!(layers[1].attribution.contains("OpenTopoMap"));
    }

    #[test]
    fn test_legend_has_six_rows() {
        let legend = Legend::depth();
        assert_eq!(legend.entries.len(), 6);
        assert_eq!(legend.entries[5].color, DepthColor::Red);
        assert!(legend.html.contains("90+ km"));
    }

    #[test]
    fn test_composition_json_shape() {
        let map = compose(EarthquakeOverlay::new(Vec::new()), FeedMetadata::default());
        let json = serde_json::to_value(&map).unwrap();

        assert_eq!(json["containerId"], "map");
        assert_eq!(json["baseLayers"][0]["urlTemplate"], STREET_TILE_URL);
        assert_eq!(json["overlay"]["style"]["fillOpacity"], 0.8);
        assert_eq!(json["legend"]["entries"][0]["label"], "0–10 km");
        assert_eq!(json["legend"]["entries"][0]["color"], "#00FFFF");
    }
}
