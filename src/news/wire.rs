use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct FeedEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) items: Option<Vec<FeedItem>>,
}

#[derive(Deserialize)]
pub(crate) struct FeedItem {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) link: Option<String>,
    #[serde(rename = "pubDate")]
    pub(crate) pub_date: Option<String>,
}
