use chrono::NaiveDateTime;
use url::Url;

use crate::{
    core::{DeskClient, DeskError, client::FEED_LOCALE, net},
    news::{model::Article, wire},
};

const PUB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The RSS search URL for `query`; this whole URL becomes the bridge's `rss_url`.
pub(super) fn feed_url(base_feed: &Url, query: &str) -> Url {
    let mut url = base_feed.clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", query);
        for (k, v) in FEED_LOCALE {
            qp.append_pair(k, v);
        }
    }
    url
}

pub(super) async fn fetch_news(
    client: &DeskClient,
    query: &str,
    base_feed: Option<&Url>,
    limit: Option<usize>,
) -> Result<Vec<Article>, DeskError> {
    if query.trim().is_empty() {
        return Err(DeskError::InvalidParams("news query must not be empty".into()));
    }

    let feed = feed_url(base_feed.unwrap_or_else(|| client.base_feed()), query);

    let mut url = client.base_news().clone();
    url.query_pairs_mut().append_pair("rss_url", feed.as_str());

    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;
    let body = net::get_text(resp).await?;

    let mut articles = parse_feed_body(&body)?;
    if let Some(n) = limit {
        articles.truncate(n);
    }
    Ok(articles)
}

pub(super) fn parse_feed_body(body: &str) -> Result<Vec<Article>, DeskError> {
    let envelope: wire::FeedEnvelope = serde_json::from_str(body)?;

    if let Some(status) = envelope.status.as_deref()
        && status != "ok"
    {
        return Err(DeskError::Feed(
            envelope
                .message
                .unwrap_or_else(|| format!("bridge status '{status}'")),
        ));
    }

    let items = envelope.items.unwrap_or_default();

    let results = items
        .into_iter()
        .map(|item| Article {
            // Untitled items are kept; their description alone still gets classified.
            title: item.title.unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
            published: item
                .pub_date
                .and_then(|s| NaiveDateTime::parse_from_str(&s, PUB_DATE_FORMAT).ok()),
        })
        .collect();

    Ok(results)
}
