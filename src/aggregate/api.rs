use crate::{
    aggregate::model::{AggregationConfig, AggregationResult, DisplayLimits, PrimaryBuckets},
    classify::{Sentiment, classify},
    core::NewsService,
    news::Article,
    quotes::QuoteSource,
};

/// Fetches `query`, turning any failure into an empty list.
pub(super) async fn fetch_or_empty<N>(news: &N, query: &str) -> Vec<Article>
where
    N: NewsService + ?Sized,
{
    match news.fetch_news(query).await {
        Ok(articles) => articles,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(query, error = %_err, "news fetch failed; using no articles");
            Vec::new()
        }
    }
}

/// Routes each article into a sentiment bucket (unless neutral) and a locality
/// bucket, then truncates every bucket to its display limit.
pub(super) fn partition(articles: Vec<Article>, limits: &DisplayLimits) -> PrimaryBuckets {
    let mut buckets = PrimaryBuckets::default();

    for classified in articles.into_iter().map(classify) {
        match classified.sentiment {
            Sentiment::Positive => buckets.positive.push(classified.article.clone()),
            Sentiment::Negative => buckets.negative.push(classified.article.clone()),
            Sentiment::Neutral => {}
        }
        if classified.is_local {
            buckets.local.push(classified.article);
        } else {
            buckets.global.push(classified.article);
        }
    }

    buckets.positive.truncate(limits.sentiment);
    buckets.negative.truncate(limits.sentiment);
    buckets.local.truncate(limits.locality);
    buckets.global.truncate(limits.locality);
    buckets
}

/// Keeps the first `per_competitor` articles of each result, in input order.
pub(super) fn merge_competitors(
    per_competitor: usize,
    results: impl IntoIterator<Item = Vec<Article>>,
) -> Vec<Article> {
    results
        .into_iter()
        .flat_map(|articles| articles.into_iter().take(per_competitor))
        .collect()
}

pub(super) async fn aggregate<N, Q>(
    news: &N,
    quotes: &Q,
    config: &AggregationConfig,
) -> AggregationResult
where
    N: NewsService + ?Sized,
    Q: QuoteSource + ?Sized,
{
    let primary_quote = config
        .primary
        .ticker
        .as_deref()
        .and_then(|t| quotes.quote(t));

    let primary_articles = fetch_or_empty(news, &config.primary.display_name).await;
    let PrimaryBuckets {
        positive,
        negative,
        local,
        global,
    } = partition(primary_articles, &config.limits);

    // Every competitor future handles its own failure, so the barrier below
    // always sees a value from each of them.
    let tasks = config.competitors.iter().map(|target| async move {
        let articles = fetch_or_empty(news, &target.display_name).await;
        let quote = target.ticker.as_deref().and_then(|t| quotes.quote(t));
        (articles, quote)
    });
    let settled = futures::future::join_all(tasks).await;

    let (competitor_articles, competitor_quotes): (Vec<_>, Vec<_>) = settled.into_iter().unzip();
    let competitors = merge_competitors(config.limits.per_competitor, competitor_articles);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        positive = positive.len(),
        negative = negative.len(),
        local = local.len(),
        global = global.len(),
        competitors = competitors.len(),
        "aggregation finished"
    );

    AggregationResult {
        positive,
        negative,
        local,
        global,
        competitors,
        primary_quote,
        competitor_quotes,
    }
}
