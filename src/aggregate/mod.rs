//! The news aggregation pipeline.
//!
//! One run fetches the primary company's headlines, splits them by sentiment and
//! locality, then fetches every competitor concurrently and merges the first few
//! articles of each. No fetch failure escapes a run: a failed query simply
//! contributes no articles.

mod api;
mod model;

pub use model::{
    AggregationConfig, AggregationResult, CompanyTarget, DisplayLimits, PrimaryBuckets,
};

use crate::{
    core::{DeskClient, NewsService},
    news::Article,
    quotes::{MockQuoteSource, QuoteSource},
};

/// Runs one aggregation against any news and quote source.
///
/// This is the entry point for callers that bring their own [`NewsService`];
/// [`AggregateBuilder`] wraps it for the common [`DeskClient`] case.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(primary = %config.primary.display_name, competitors = config.competitors.len()))
)]
pub async fn aggregate<N, Q>(news: &N, quotes: &Q, config: &AggregationConfig) -> AggregationResult
where
    N: NewsService + ?Sized,
    Q: QuoteSource + ?Sized,
{
    api::aggregate(news, quotes, config).await
}

/// Splits articles into truncated sentiment and locality buckets.
#[must_use]
pub fn partition(articles: Vec<Article>, limits: &DisplayLimits) -> PrimaryBuckets {
    api::partition(articles, limits)
}

/// A builder for a single aggregation run over a [`DeskClient`].
///
/// Starts from [`AggregationConfig::default`] and a randomly seeded
/// [`MockQuoteSource`].
pub struct AggregateBuilder {
    client: DeskClient,
    config: AggregationConfig,
    quotes: Box<dyn QuoteSource>,
}

impl AggregateBuilder {
    /// Creates a new `AggregateBuilder`.
    #[must_use]
    pub fn new(client: &DeskClient) -> Self {
        Self {
            client: client.clone(),
            config: AggregationConfig::default(),
            quotes: Box::new(MockQuoteSource::new()),
        }
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: AggregationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the primary company.
    #[must_use]
    pub fn primary(mut self, target: CompanyTarget) -> Self {
        self.config.primary = target;
        self
    }

    /// Replaces the competitor list. Order determines merge order.
    #[must_use]
    pub fn competitors<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = CompanyTarget>,
    {
        self.config.competitors = targets.into_iter().collect();
        self
    }

    /// Appends a single competitor.
    #[must_use]
    pub fn add_competitor(mut self, target: CompanyTarget) -> Self {
        self.config.competitors.push(target);
        self
    }

    /// Overrides the per-bucket display limits.
    #[must_use]
    pub const fn limits(mut self, limits: DisplayLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Sets where stock snapshots come from.
    #[must_use]
    pub fn quotes(mut self, source: impl QuoteSource + 'static) -> Self {
        self.quotes = Box::new(source);
        self
    }

    /// Executes the run. Always completes; failed fetches yield empty buckets.
    pub async fn run(self) -> AggregationResult {
        aggregate(&self.client, self.quotes.as_ref(), &self.config).await
    }
}
