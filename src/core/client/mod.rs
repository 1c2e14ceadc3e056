//! Public client surface + builder.
//! Endpoint and UA defaults live in `constants`.

mod constants;

use crate::core::DeskError;
use constants::{DEFAULT_BASE_FEED, DEFAULT_BASE_NEWS, USER_AGENT};
pub(crate) use constants::FEED_LOCALE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the news feed bridge.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DeskClient {
    http: Client,
    base_news: Url,
    base_feed: Url,
}

impl DeskClient {
    /// Create a new builder.
    pub fn builder() -> DeskClientBuilder {
        DeskClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_feed(&self) -> &Url {
        &self.base_feed
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DeskClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    base_feed: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl DeskClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the feed bridge endpoint (e.g., `https://api.rss2json.com/v1/api.json`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the RSS search base (e.g., `https://news.google.com/rss/search`).
    #[must_use]
    pub fn base_feed(mut self, url: Url) -> Self {
        self.base_feed = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    ///
    /// Without one, a hung feed request stalls the aggregation that issued it.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default endpoint fails to parse or the HTTP client
    /// cannot be constructed (e.g. TLS backend initialization fails).
    pub fn build(self) -> Result<DeskClient, DeskError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_feed = match self.base_feed {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_FEED)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DeskClient {
            http,
            base_news,
            base_feed,
        })
    }
}
