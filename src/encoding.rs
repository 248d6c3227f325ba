//! Visual encoding of earthquake properties.
//!
//! Magnitude drives the marker radius, depth picks one of six color buckets.
//! The bucket table is shared by marker construction and the legend.

use serde::{Serialize, Serializer};

use crate::constants::RADIUS_PER_MAGNITUDE;

/// Fill colors used for depth buckets, shallow to deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthColor {
    Cyan,
    Green,
    LightGreen,
    Yellow,
    Orange,
    Red,
}

impl DepthColor {
    pub fn hex(self) -> &'static str {
        match self {
            DepthColor::Cyan => "#00FFFF",
            DepthColor::Green => "#00FF00",
            DepthColor::LightGreen => "#7FFF00",
            DepthColor::Yellow => "#FFFF00",
            DepthColor::Orange => "#FF7F00",
            DepthColor::Red => "#FF0000",
        }
    }
}

// Serialized as the CSS color the browser paints with
impl Serialize for DepthColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// One row of the depth table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBucket {
    /// Depths strictly greater than this fall in the bucket.
    pub lower_bound: f64,
    /// Depth shown as the start of the range in the legend.
    pub legend_floor: u32,
    pub color: DepthColor,
}

/// Ordered from deepest to shallowest. The last row catches everything.
pub const DEPTH_BUCKETS: [DepthBucket; 6] = [
    DepthBucket { lower_bound: 90.0, legend_floor: 90, color: DepthColor::Red },
    DepthBucket { lower_bound: 70.0, legend_floor: 70, color: DepthColor::Orange },
    DepthBucket { lower_bound: 50.0, legend_floor: 50, color: DepthColor::Yellow },
    DepthBucket { lower_bound: 30.0, legend_floor: 30, color: DepthColor::LightGreen },
    DepthBucket { lower_bound: 10.0, legend_floor: 10, color: DepthColor::Green },
    DepthBucket { lower_bound: f64::NEG_INFINITY, legend_floor: 0, color: DepthColor::Cyan },
];

/// Marker radius for a magnitude. Not clamped: zero or negative magnitudes
/// give a zero or negative radius.
pub fn marker_size(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}

/// Fill color for a depth in kilometers.
pub fn depth_color(depth: f64) -> DepthColor {
    DEPTH_BUCKETS
        .iter()
        .find(|bucket| depth > bucket.lower_bound)
        .map(|bucket| bucket.color)
        // NaN compares false against every bound, including -inf
        .unwrap_or(DepthColor::Cyan)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: DepthColor,
    pub label: String,
}

/// Legend rows in display order (shallowest first): `0–10 km` up to `90+ km`.
pub fn legend_entries() -> Vec<LegendEntry> {
    let ascending: Vec<&DepthBucket> = DEPTH_BUCKETS.iter().rev().collect();

    ascending
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let label = match ascending.get(i + 1) {
                Some(next) => format!("{}–{} km", bucket.legend_floor, next.legend_floor),
                None => format!("{}+ km", bucket.legend_floor),
            };
            LegendEntry {
                color: bucket.color,
                label,
            }
        })
        .collect()
}
