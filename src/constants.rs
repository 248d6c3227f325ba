// Feed
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

// Port configuration
pub const DEFAULT_PORT: u16 = 3001;

// Marker encoding
pub const RADIUS_PER_MAGNITUDE: f64 = 5.0;
pub const MARKER_STROKE_COLOR: &str = "#000";
pub const MARKER_STROKE_WEIGHT: u32 = 1;
pub const MARKER_OPACITY: f64 = 1.0;
pub const MARKER_FILL_OPACITY: f64 = 0.8;

// Initial view: continental United States
pub const MAP_CONTAINER_ID: &str = "map";
pub const MAP_CENTER: (f64, f64) = (37.09, -95.71);
pub const MAP_ZOOM: u8 = 5;

// Tile providers
pub const STREET_LAYER_NAME: &str = "Street Map";
pub const STREET_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_ATTRIBUTION: &str = "© OpenStreetMap contributors";

pub const TOPO_LAYER_NAME: &str = "Topographic Map";
pub const TOPO_TILE_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const TOPO_ATTRIBUTION: &str =
    "Map data: © OpenStreetMap contributors, SRTM | Map style: © OpenTopoMap (CC-BY-SA)";

pub const OVERLAY_NAME: &str = "Earthquakes";

// Legend
pub const LEGEND_POSITION: &str = "bottomright";
pub const LEGEND_TITLE: &str = "Earthquake Depth (km)";
