use std::sync::Arc;
use std::time::Duration;

use newsdesk_rs::{
    AggregationConfig, Article, CompanyTarget, DisplayLimits, MockQuoteSource, NoQuotes,
    Sentiment, aggregate, classify_sentiment, is_local,
};
use tokio::sync::Barrier;

use crate::common::{self, FakeNews};

const COMPETITORS: [&str; 5] = ["Google", "Apple", "Amazon", "Meta", "IBM"];

#[tokio::test]
async fn ten_positive_articles_keep_first_three_in_order() {
    let news = FakeNews::new().ok("Microsoft", common::articles("Record profit", 10));

    let result = aggregate(&news, &NoQuotes, &AggregationConfig::default()).await;

    assert_eq!(
        common::titles(&result.positive),
        ["Record profit 0", "Record profit 1", "Record profit 2"]
    );
    assert!(result.negative.is_empty());
    assert_eq!(result.global.len(), 5);
    assert!(result.local.is_empty());
}

#[tokio::test]
async fn five_competitors_with_four_articles_merge_to_ten() {
    let mut news = FakeNews::new();
    for name in COMPETITORS {
        news = news.ok(name, common::articles(name, 4));
    }

    let result = aggregate(&news, &NoQuotes, &AggregationConfig::default()).await;

    assert_eq!(
        common::titles(&result.competitors),
        [
            "Google 0", "Google 1", "Apple 0", "Apple 1", "Amazon 0", "Amazon 1", "Meta 0",
            "Meta 1", "IBM 0", "IBM 1",
        ]
    );
}

#[tokio::test]
async fn failed_competitor_contributes_nothing() {
    let news = FakeNews::new()
        .ok("Google", common::articles("Google", 3))
        .ok("Apple", common::articles("Apple", 3))
        .ok("Amazon", common::articles("Amazon", 3))
        .fail("Meta")
        .ok("IBM", common::articles("IBM", 3));

    let result = aggregate(&news, &NoQuotes, &AggregationConfig::default()).await;

    assert_eq!(result.competitors.len(), 8);
    assert!(result.competitors.iter().all(|a| !a.title.starts_with("Meta")));
    assert_eq!(result.competitors[6].title, "IBM 0");
}

#[tokio::test]
async fn primary_failure_still_collects_competitors() {
    let news = FakeNews::new()
        .fail("Microsoft")
        .ok("Google", common::articles("Google", 1));

    let result = aggregate(&news, &NoQuotes, &AggregationConfig::default()).await;

    assert!(result.positive.is_empty());
    assert!(result.negative.is_empty());
    assert!(result.local.is_empty());
    assert!(result.global.is_empty());
    assert_eq!(common::titles(&result.competitors), ["Google 0"]);
}

#[tokio::test]
async fn competitor_fetches_run_concurrently() {
    // Every competitor waits until all five are in flight; a sequential fan-out
    // would never get past the first one.
    let barrier = Arc::new(Barrier::new(COMPETITORS.len()));
    let mut news = FakeNews::new().gate(barrier, &COMPETITORS);
    for name in COMPETITORS {
        news = news.ok(name, common::articles(name, 2));
    }

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        aggregate(&news, &NoQuotes, &AggregationConfig::default()),
    )
    .await
    .expect("competitor fetches were not issued concurrently");

    assert_eq!(result.competitors.len(), 10);
}

#[tokio::test]
async fn primary_is_fetched_before_competitors() {
    let news = FakeNews::new();
    let _ = aggregate(&news, &NoQuotes, &AggregationConfig::default()).await;

    let calls = news.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[0], "Microsoft");
    let mut rest: Vec<_> = calls[1..].to_vec();
    rest.sort();
    let mut expected: Vec<_> = COMPETITORS.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(rest, expected);
}

#[tokio::test]
async fn every_article_lands_in_one_locality_bucket() {
    let articles = vec![
        Article::new("Growth in the US", "", "1"),
        Article::new("Growth in Japan", "", "2"),
        Article::new("Lawsuit in America", "", "3"),
        Article::new("Quiet day", "", "4"),
        Article::new("Scandal abroad", "nothing local", "5"),
    ];
    let news = FakeNews::new().ok("Microsoft", articles.clone());
    let config = AggregationConfig {
        limits: DisplayLimits {
            sentiment: 100,
            locality: 100,
            per_competitor: 2,
        },
        ..AggregationConfig::default()
    };

    let result = aggregate(&news, &NoQuotes, &config).await;

    assert_eq!(result.local.len() + result.global.len(), articles.len());
    for a in &articles {
        let in_local = result.local.contains(a);
        let in_global = result.global.contains(a);
        assert!(in_local ^ in_global, "{}", a.title);
        assert_eq!(in_local, is_local(a));

        let sentiment = classify_sentiment(&a.text());
        assert_eq!(result.positive.contains(a), sentiment == Sentiment::Positive);
        assert_eq!(result.negative.contains(a), sentiment == Sentiment::Negative);
    }
    assert_eq!(result.positive.len(), 2);
    assert_eq!(result.negative.len(), 2);
}

#[tokio::test]
async fn untitled_article_is_classified_by_description() {
    let untitled = Article::new("", "Layoffs hit United States plants", "x");
    let news = FakeNews::new().ok("Microsoft", vec![untitled.clone()]);

    let result = aggregate(&news, &NoQuotes, &AggregationConfig::default()).await;

    assert_eq!(result.local, [untitled.clone()]);
    assert_eq!(result.negative, [untitled]);
    assert!(result.global.is_empty());
    assert!(result.positive.is_empty());
}

#[tokio::test]
async fn competitor_articles_are_not_classified() {
    let news = FakeNews::new().ok(
        "Google",
        vec![Article::new("Google lawsuit in the US", "", "g")],
    );
    let config = AggregationConfig {
        competitors: vec![CompanyTarget::new("Google")],
        ..AggregationConfig::default()
    };

    let result = aggregate(&news, &NoQuotes, &config).await;

    assert_eq!(common::titles(&result.competitors), ["Google lawsuit in the US"]);
    assert!(result.negative.is_empty());
    assert!(result.local.is_empty());
}

#[tokio::test]
async fn quotes_follow_tickers() {
    let news = FakeNews::new();
    let config = AggregationConfig {
        competitors: vec![
            CompanyTarget::with_ticker("Google", "GOOGL"),
            CompanyTarget::new("Private Co"),
        ],
        ..AggregationConfig::default()
    };

    let result = aggregate(&news, &MockQuoteSource::seeded(3), &config).await;

    assert_eq!(result.primary_quote.map(|q| q.symbol), Some("MSFT".to_string()));
    assert_eq!(result.competitor_quotes.len(), 2);
    assert_eq!(
        result.competitor_quotes[0].as_ref().map(|q| q.symbol.as_str()),
        Some("GOOGL")
    );
    assert!(result.competitor_quotes[1].is_none());
}
