use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Inside the aggregation pipeline every variant is treated the same way: the
/// affected query contributes zero articles and the run continues.
#[derive(Debug, Error)]
pub enum DeskError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The feed bridge answered, but reported that it could not load the feed.
    #[error("Feed unavailable: {0}")]
    Feed(String),

    /// Invalid parameters were supplied to a builder.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}
