use serde::Serialize;

use crate::news::Article;
use crate::quotes::StockSnapshot;

/// A company whose news (and optionally quote) is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyTarget {
    /// The name used as the news search query.
    pub display_name: String,
    /// The ticker symbol used for the quote, if the company has one.
    pub ticker: Option<String>,
}

impl CompanyTarget {
    /// A target with no ticker.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ticker: None,
        }
    }

    /// A target with a ticker symbol.
    pub fn with_ticker(display_name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ticker: Some(ticker.into()),
        }
    }
}

/// Truncation applied to each bucket before hand-off. Always first-N in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayLimits {
    /// Cap for the positive and negative buckets. (Default: 3)
    pub sentiment: usize,
    /// Cap for the local and global buckets. (Default: 5)
    pub locality: usize,
    /// Articles kept from each competitor. (Default: 2)
    pub per_competitor: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            sentiment: 3,
            locality: 5,
            per_competitor: 2,
        }
    }
}

/// Everything the pipeline needs to know about what to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationConfig {
    pub primary: CompanyTarget,
    /// Competitors, in the order their articles are merged.
    pub competitors: Vec<CompanyTarget>,
    pub limits: DisplayLimits,
}

impl Default for AggregationConfig {
    /// Microsoft against Google, Apple, Amazon, Meta and IBM.
    fn default() -> Self {
        Self {
            primary: CompanyTarget::with_ticker("Microsoft", "MSFT"),
            competitors: vec![
                CompanyTarget::with_ticker("Google", "GOOGL"),
                CompanyTarget::with_ticker("Apple", "AAPL"),
                CompanyTarget::with_ticker("Amazon", "AMZN"),
                CompanyTarget::with_ticker("Meta", "META"),
                CompanyTarget::with_ticker("IBM", "IBM"),
            ],
            limits: DisplayLimits::default(),
        }
    }
}

/// The primary company's articles split by sentiment and by locality.
///
/// Neutral articles appear in no sentiment bucket; every article appears in
/// exactly one locality bucket (before truncation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrimaryBuckets {
    pub positive: Vec<Article>,
    pub negative: Vec<Article>,
    pub local: Vec<Article>,
    pub global: Vec<Article>,
}

/// The output of one aggregation run, ready for a renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationResult {
    pub positive: Vec<Article>,
    pub negative: Vec<Article>,
    pub local: Vec<Article>,
    pub global: Vec<Article>,
    /// First articles of each competitor, concatenated in competitor order.
    pub competitors: Vec<Article>,
    pub primary_quote: Option<StockSnapshot>,
    /// One entry per competitor, in competitor order.
    pub competitor_quotes: Vec<Option<StockSnapshot>>,
}
