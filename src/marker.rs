use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{
    MARKER_FILL_OPACITY, MARKER_OPACITY, MARKER_STROKE_COLOR, MARKER_STROKE_WEIGHT,
};
use crate::encoding::{depth_color, marker_size, DepthColor};
use crate::feed::EarthquakeFeature;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// Structure describing one circle on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMarker {
    pub id: String,
    pub position: LatLng,
    pub radius: f64,
    pub fill_color: DepthColor,
    pub popup_text: String,
    pub time: Option<DateTime<Utc>>,
}

/// Stroke and opacity shared by every earthquake marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: MARKER_STROKE_COLOR,
            weight: MARKER_STROKE_WEIGHT,
            opacity: MARKER_OPACITY,
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }
}

/// Builds the marker for one feature. Unrated events get a zero radius.
pub fn build_marker(feature: &EarthquakeFeature) -> VisualMarker {
    VisualMarker {
        id: feature.id.clone(),
        position: LatLng {
            lat: feature.latitude(),
            lng: feature.longitude(),
        },
        radius: marker_size(feature.magnitude.unwrap_or(0.0)),
        fill_color: depth_color(feature.depth()),
        popup_text: popup_text(feature),
        time: feature.time,
    }
}

/// Builds markers for a whole collection, keeping feed order.
pub fn build_markers(features: &[EarthquakeFeature]) -> Vec<VisualMarker> {
    features.iter().map(build_marker).collect()
}

/// Popup HTML: location, magnitude and depth on separate lines.
pub fn popup_text(feature: &EarthquakeFeature) -> String {
    let magnitude = feature
        .magnitude
        .map(|m| m.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "Location: {}<br>Magnitude: {}<br>Depth: {} km",
        escape_html(&feature.place),
        magnitude,
        feature.depth()
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(magnitude: Option<f64>, coordinates: [f64; 3]) -> EarthquakeFeature {
        EarthquakeFeature {
            id: "test".to_string(),
            magnitude,
            place: "Somewhere".to_string(),
            coordinates,
            time: None,
            url: None,
        }
    }

    #[test]
    fn test_moderate_shallow_quake() {
        let marker = build_marker(&feature(Some(5.0), [-100.0, 40.0, 15.0]));

        assert_eq!(marker.position, LatLng { lat: 40.0, lng: -100.0 });
        assert_eq!(marker.radius, 25.0);
        assert_eq!(marker.fill_color, DepthColor::Green);
        assert!(marker.popup_text.contains("Magnitude: 5<br>"));
        assert!(marker.popup_text.contains("Depth: 15 km"));
        assert!(marker.popup_text.starts_with("Location: Somewhere"));
    }

    #[test]
    fn test_deep_quake_is_red() {
        let marker = build_marker(&feature(Some(2.3), [10.0, 10.0, 95.0]));
        assert_eq!(marker.fill_color, DepthColor::Red);
    }

    #[test]
    fn test_fractional_values_in_popup() {
        let marker = build_marker(&feature(Some(1.25), [0.0, 0.0, 7.5]));
        assert!(marker.popup_text.contains("Magnitude: 1.25"));
        assert!(marker.popup_text.contains("Depth: 7.5 km"));
    }

    #[test]
    fn test_unrated_quake() {
        let marker = build_marker(&feature(None, [0.0, 0.0, -1.0]));
        assert_eq!(marker.radius, 0.0);
        assert_eq!(marker.fill_color, DepthColor::Cyan);
        assert!(marker.popup_text.contains("Magnitude: unknown"));
    }

    #[test]
    fn test_place_is_escaped() {
        let mut f = feature(Some(1.0), [0.0, 0.0, 1.0]);
        f.place = "<script>alert('x')</script> & co".to_string();
        let text = popup_text(&f);
        assert!(!text.contains("<script>"));
        assert!(text.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co"));
    }

    #[test]
    fn test_build_markers_is_repeatable() {
        let features = vec![
            feature(Some(4.4), [1.0, 2.0, 33.0]),
            feature(Some(0.8), [3.0, 4.0, 5.0]),
            feature(None, [5.0, 6.0, 120.0]),
        ];

        let first = build_markers(&features);
        let second = build_markers(&features);

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_marker_json_shape() {
        let marker = build_marker(&feature(Some(5.0), [-100.0, 40.0, 15.0]));
        let json = serde_json::to_value(&marker).unwrap();

        assert_eq!(json["fillColor"], "#00FF00");
        assert_eq!(json["radius"], 25.0);
        assert_eq!(json["position"]["lat"], 40.0);
        assert!(json["popupText"].is_string());
    }
}
