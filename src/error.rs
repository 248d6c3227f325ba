use thiserror::Error;

/// Failure to retrieve or understand the earthquake feed.
///
/// Every variant is handled the same way by the orchestrator; the variants
/// only make the log line say what went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("malformed feed: {0}")]
    Parse(String),
}
