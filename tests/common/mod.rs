#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{fs, path::Path};

use httpmock::{Method::GET, Mock, MockServer};
use newsdesk_rs::{Article, DeskClient, DeskError, NewsFuture, NewsService};
use tokio::sync::Barrier;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// The `rss_url` value the client sends to the bridge for `query` (single-word queries).
pub fn feed_url(query: &str) -> String {
    format!("https://news.google.com/rss/search?q={query}&hl=en-US&gl=US&ceid=US%3Aen")
}

/// A client whose bridge endpoint points at `server`.
pub fn client_for(server: &MockServer) -> DeskClient {
    DeskClient::builder()
        .base_news(Url::parse(&format!("{}/v1/api.json", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// Mocks the bridge answer for `query` with a raw body.
pub fn mock_bridge<'a>(server: &'a MockServer, query: &str, status: u16, body: String) -> Mock<'a> {
    let rss_url = feed_url(query);
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/api.json")
            .query_param("rss_url", rss_url);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// An rss2json body with `n` items titled `"{prefix} {i}"`.
pub fn bridge_body(prefix: &str, n: usize) -> String {
    let items: Vec<_> = (0..n)
        .map(|i| {
            serde_json::json!({
                "title": format!("{prefix} {i}"),
                "pubDate": "2024-05-01 14:03:00",
                "link": format!("https://news.test/{}/{i}", prefix.replace(' ', "-")),
                "description": "",
            })
        })
        .collect();
    serde_json::json!({ "status": "ok", "feed": {}, "items": items }).to_string()
}

/// `n` articles titled `"{prefix} {i}"`, in order.
pub fn articles(prefix: &str, n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| Article::new(format!("{prefix} {i}"), "", format!("https://news.test/{i}")))
        .collect()
}

pub fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title.as_str()).collect()
}

/* ---------------- in-memory news source ---------------- */

pub enum Reply {
    Articles(Vec<Article>),
    Fail,
}

/// Serves canned replies per query; unknown queries fail with a 404.
#[derive(Default)]
pub struct FakeNews {
    replies: HashMap<String, Reply>,
    gate: Option<(Arc<Barrier>, Vec<String>)>,
    calls: Mutex<Vec<String>>,
}

impl FakeNews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, query: &str, articles: Vec<Article>) -> Self {
        self.replies.insert(query.to_string(), Reply::Articles(articles));
        self
    }

    pub fn fail(mut self, query: &str) -> Self {
        self.replies.insert(query.to_string(), Reply::Fail);
        self
    }

    /// Makes each of `queries` wait on `barrier` before answering.
    pub fn gate(mut self, barrier: Arc<Barrier>, queries: &[&str]) -> Self {
        self.gate = Some((barrier, queries.iter().map(|q| q.to_string()).collect()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl NewsService for FakeNews {
    fn fetch_news<'a>(&'a self, query: &'a str) -> NewsFuture<'a> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(query.to_string());

            if let Some((barrier, gated)) = &self.gate
                && gated.iter().any(|g| g == query)
            {
                barrier.wait().await;
            }

            match self.replies.get(query) {
                Some(Reply::Articles(a)) => Ok(a.clone()),
                Some(Reply::Fail) | None => Err(DeskError::Status {
                    status: 404,
                    url: format!("fake://{query}"),
                }),
            }
        })
    }
}
