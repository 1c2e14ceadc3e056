//! Keyword-based sentiment and locality classification of headlines.
//!
//! Both classifiers are substring tests over fixed keyword lists. Sentiment matching
//! is case-insensitive; locality matching is case-sensitive, so "US" counts but "us"
//! does not.

use serde::Serialize;

use crate::news::Article;

/// Keywords that push a headline's score up by one each when present.
pub const POSITIVE_KEYWORDS: [&str; 10] = [
    "growth", "profit", "record", "beat", "success", "win", "positive", "up", "increase", "surge",
];

/// Keywords that push a headline's score down by one each when present.
pub const NEGATIVE_KEYWORDS: [&str; 10] = [
    "loss", "decline", "fall", "drop", "negative", "down", "lawsuit", "scandal", "cut", "layoff",
];

/// Case-sensitive markers of US-local coverage.
pub const LOCAL_KEYWORDS: [&str; 5] = ["US", "United States", "America", "U.S.", "USA"];

/// The keyword sentiment of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a keyword score to a label. Zero is neutral.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score > 0 {
            Self::Positive
        } else if score < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of positive keywords present minus number of negative keywords present.
///
/// Each keyword counts at most once, however often it occurs.
#[must_use]
pub fn sentiment_score(text: &str) -> i32 {
    let lower = text.to_lowercase();
    let present = |words: &[&str]| {
        i32::try_from(words.iter().filter(|w| lower.contains(*w)).count()).unwrap_or(i32::MAX)
    };
    present(&POSITIVE_KEYWORDS) - present(&NEGATIVE_KEYWORDS)
}

/// Classifies `text` by keyword score.
#[must_use]
pub fn classify_sentiment(text: &str) -> Sentiment {
    Sentiment::from_score(sentiment_score(text))
}

/// Whether the article's title or description mentions the US.
#[must_use]
pub fn is_local(article: &Article) -> bool {
    let text = article.text();
    LOCAL_KEYWORDS.iter().any(|k| text.contains(k))
}

/// An article together with its derived labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedArticle {
    pub article: Article,
    pub sentiment: Sentiment,
    pub is_local: bool,
}

/// Classifies an article. Sentiment reads the same title + description text as locality.
#[must_use]
pub fn classify(article: Article) -> ClassifiedArticle {
    let sentiment = classify_sentiment(&article.text());
    let is_local = is_local(&article);
    ClassifiedArticle {
        article,
        sentiment,
        is_local,
    }
}
