//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// rss2json bridge endpoint (the feed URL is passed as `rss_url`).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://api.rss2json.com/v1/api.json";

/// Google News RSS search base (the query is passed as `q`).
pub(crate) const DEFAULT_BASE_FEED: &str = "https://news.google.com/rss/search";

/// Locale parameters appended to every feed search.
pub(crate) const FEED_LOCALE: [(&str, &str); 3] = [("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")];
