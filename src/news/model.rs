use chrono::NaiveDateTime;
use serde::Serialize;

/// A single news article returned by a feed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The headline of the article.
    pub title: String,
    /// The teaser text of the article. Empty when the feed supplies none.
    pub description: String,
    /// A direct link to the article.
    pub link: String,
    /// When the feed says the article was published, if it could be parsed.
    pub published: Option<NaiveDateTime>,
}

impl Article {
    /// Creates an article with no publication timestamp.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            published: None,
        }
    }

    /// Title and description joined by a single space; the text both classifiers read.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
