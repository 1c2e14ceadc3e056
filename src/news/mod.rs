mod api;
mod model;
mod wire;

pub use model::Article;

use url::Url;

use crate::{DeskClient, DeskError};

/// A builder for fetching news articles matching a free-text query.
pub struct NewsBuilder {
    client: DeskClient,
    query: String,
    base_feed: Option<Url>,
    limit: Option<usize>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given query.
    pub fn new(client: &DeskClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            base_feed: None,
            limit: None,
        }
    }

    /// Overrides the RSS search base for this call only.
    #[must_use]
    pub fn feed_base(mut self, base: Url) -> Self {
        self.base_feed = Some(base);
        self
    }

    /// Keeps at most `n` articles, in feed order.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Executes the request and fetches the news articles.
    ///
    /// # Errors
    ///
    /// Returns a `DeskError` if the request fails, the bridge answers with a
    /// non-success status, or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(query = %self.query)))]
    pub async fn fetch(self) -> Result<Vec<Article>, DeskError> {
        api::fetch_news(
            &self.client,
            &self.query,
            self.base_feed.as_ref(),
            self.limit,
        )
        .await
    }
}
