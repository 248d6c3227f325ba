use tracing::{error, info};

use crate::error::FeedError;
use crate::feed::{fetch_feed, FeedClient, ReqwestFeedClient};
use crate::marker::build_markers;
use crate::presenter::{compose, EarthquakeOverlay, MapComposition};

/// Fetches the feed once, turns every feature into a marker and composes
/// the map around them. The presenter only runs when the feed was usable.
pub async fn load_map<C: FeedClient>(
    client: &C,
    feed_url: &str,
) -> Result<MapComposition, FeedError> {
    info!("🌍 Fetching earthquake feed: {}", feed_url);
    let collection = fetch_feed(client, feed_url).await?;

    let start_time = std::time::Instant::now();
    let markers = build_markers(&collection.features);

    info!(
        "✅ Built {} markers in {:.2} sec",
        markers.len(),
        start_time.elapsed().as_secs_f64()
    );
    if let Some(ref title) = collection.metadata.title {
        info!("   📰 {}", title);
    }
    if let Some(generated) = collection.metadata.generated {
        info!("   🕒 Feed generated at {}", generated.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(compose(EarthquakeOverlay::new(markers), collection.metadata))
}

/// Top of the flow. Any feed failure is logged and swallowed: the caller
/// gets `None` and no map is created.
pub async fn run<C: FeedClient>(client: &C, feed_url: &str) -> Option<MapComposition> {
    settle(load_map(client, feed_url).await)
}

/// [`run`] over a real HTTP client. Failing to build the client counts as a
/// failed fetch.
pub async fn run_http(feed_url: &str) -> Option<MapComposition> {
    match ReqwestFeedClient::new() {
        Ok(client) => run(&client, feed_url).await,
        Err(e) => settle(Err(e)),
    }
}

fn settle(result: Result<MapComposition, FeedError>) -> Option<MapComposition> {
    match result {
        Ok(map) => Some(map),
        Err(e) => {
            error!("Error fetching data: {}", e);
            None
        }
    }
}
