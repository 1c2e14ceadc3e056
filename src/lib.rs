//! newsdesk-rs: company news desk.
//!
//! Fetches headlines for a company and its competitors, buckets the company's
//! headlines by keyword sentiment and by US locality, merges the first few
//! competitor headlines, and hands everything to a region-keyed renderer.
//!
//! ```no_run
//! # use newsdesk_rs::{AggregateBuilder, DeskClient, TextRenderer, render_result};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DeskClient::builder().build()?;
//! let result = AggregateBuilder::new(&client).run().await;
//!
//! let mut out = TextRenderer::new(std::io::stdout().lock());
//! render_result(&mut out, &result)?;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod classify;
pub mod core;
pub mod news;
pub mod quotes;
pub mod render;

pub use aggregate::{
    AggregateBuilder, AggregationConfig, AggregationResult, CompanyTarget, DisplayLimits,
    PrimaryBuckets, aggregate, partition,
};
pub use classify::{ClassifiedArticle, Sentiment, classify, classify_sentiment, is_local};
pub use crate::core::{DeskClient, DeskClientBuilder, DeskError, NewsFuture, NewsService};
pub use news::{Article, NewsBuilder};
pub use quotes::{MockQuoteSource, NoQuotes, QuoteSource, StockSnapshot};
pub use render::{Region, Renderer, TextRenderer, render_result};
