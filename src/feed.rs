//! USGS GeoJSON feed: retrieval and parsing.

use chrono::{DateTime, Utc};
use geojson::{feature::Id, Feature, FeatureCollection, JsonObject, Value};
use serde::Serialize;
use std::future::Future;
use tracing::{debug, warn};

use crate::error::FeedError;

/// One earthquake event as reported by the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeFeature {
    pub id: String,
    /// Absent for a handful of events the network has not rated yet.
    pub magnitude: Option<f64>,
    pub place: String,
    /// Longitude, latitude, depth in km
    pub coordinates: [f64; 3],
    pub time: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl EarthquakeFeature {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn depth(&self) -> f64 {
        self.coordinates[2]
    }
}

/// The feed's own `metadata` member.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedMetadata {
    pub title: Option<String>,
    pub generated: Option<DateTime<Utc>>,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EarthquakeCollection {
    pub metadata: FeedMetadata,
    pub features: Vec<EarthquakeFeature>,
}

/// Parses a GeoJSON FeatureCollection body into earthquake features.
///
/// Features without a point geometry carrying longitude, latitude and depth
/// are skipped; everything else about a feature is best effort.
pub fn parse_feed(body: &[u8]) -> Result<EarthquakeCollection, FeedError> {
    let collection: FeatureCollection =
        serde_json::from_slice(body).map_err(|e| FeedError::Parse(e.to_string()))?;

    let metadata = collection
        .foreign_members
        .as_ref()
        .and_then(|members| members.get("metadata"))
        .and_then(|value| value.as_object())
        .map(parse_metadata)
        .unwrap_or_default();

    let total = collection.features.len();
    let features: Vec<EarthquakeFeature> = collection
        .features
        .iter()
        .filter_map(|feature| {
            let parsed = parse_feature(feature);
            if parsed.is_none() {
                warn!("⚠️  Skipping feature {:?} without point coordinates", feature_id(feature));
            }
            parsed
        })
        .collect();

    debug!("Parsed {} of {} features", features.len(), total);

    Ok(EarthquakeCollection { metadata, features })
}

fn parse_metadata(object: &JsonObject) -> FeedMetadata {
    FeedMetadata {
        title: object.get("title").and_then(|v| v.as_str()).map(String::from),
        generated: object
            .get("generated")
            .and_then(|v| v.as_i64())
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        count: object.get("count").and_then(|v| v.as_u64()),
    }
}

fn parse_feature(feature: &Feature) -> Option<EarthquakeFeature> {
    let coordinates = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Point(position)) if position.len() >= 3 => {
            [position[0], position[1], position[2]]
        }
        _ => return None,
    };

    Some(EarthquakeFeature {
        id: feature_id(feature).unwrap_or_default(),
        magnitude: feature.property("mag").and_then(|v| v.as_f64()),
        place: feature
            .property("place")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        coordinates,
        time: feature
            .property("time")
            .and_then(|v| v.as_i64())
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        url: feature.property("url").and_then(|v| v.as_str()).map(String::from),
    })
}

fn feature_id(feature: &Feature) -> Option<String> {
    match feature.id.as_ref()? {
        Id::String(s) => Some(s.clone()),
        Id::Number(n) => Some(n.to_string()),
    }
}

/// HTTP access to the feed, abstracted for testing.
pub trait FeedClient: Send + Sync {
    /// Performs a GET and returns the response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FeedError>> + Send;
}

const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

/// Feed client backed by reqwest.
#[derive(Clone)]
pub struct ReqwestFeedClient {
    client: reqwest::Client,
}

impl ReqwestFeedClient {
    pub fn new() -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FeedError::Request(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl FeedClient for ReqwestFeedClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| FeedError::Body(e.to_string()))
    }
}

/// Retrieves and parses the feed in one step.
pub async fn fetch_feed<C: FeedClient>(
    client: &C,
    url: &str,
) -> Result<EarthquakeCollection, FeedError> {
    debug!("GET {}", url);
    let body = client.get(url).await?;
    parse_feed(&body)
}
