use crate::core::{DeskClient, DeskError};
use crate::news::{Article, NewsBuilder};

/// Boxed future returned by [`NewsService::fetch_news`].
pub type NewsFuture<'a> =
    core::pin::Pin<Box<dyn core::future::Future<Output = Result<Vec<Article>, DeskError>> + Send + 'a>>;

/// A trait for services that can search for news articles by free-text query.
///
/// This decouples the aggregation pipeline from the HTTP adapter, so the pipeline
/// can be driven by in-memory sources in tests. It is implemented by [`DeskClient`].
pub trait NewsService: Send + Sync {
    /// Asynchronously fetches the articles matching `query`, in feed order.
    ///
    /// An empty result set is `Ok(vec![])`, not an error.
    fn fetch_news<'a>(&'a self, query: &'a str) -> NewsFuture<'a>;
}

impl NewsService for DeskClient {
    fn fetch_news<'a>(&'a self, query: &'a str) -> NewsFuture<'a> {
        Box::pin(NewsBuilder::new(self, query).fetch())
    }
}
