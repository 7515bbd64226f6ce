use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named RSS/Atom source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub name: String,
    pub url: String,
}

impl Feed {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Built-in list of news sources used when no sources are given
pub fn default_feeds() -> Vec<Feed> {
    vec![
        Feed::new("CNA", "https://www.channelnewsasia.com/rssfeeds/8395986"),
        Feed::new("BBC", "http://feeds.bbci.co.uk/news/rss.xml"),
        Feed::new("StraitsTimes", "https://www.straitstimes.com/news/world/rss.xml"),
    ]
}

/// Feed entry normalized right after parsing
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    /// First link of the entry
    pub url: String,
    pub title: String,
    pub published_on: DateTime<Utc>,
    /// Raw (HTML) summary, if the feed provides one
    pub summary: Option<String>,
}

/// Simplified projection of a feed entry handed to consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub url: String,
    pub title: String,
    pub published_on: DateTime<Utc>,
    pub short_summary: Option<String>,
}

impl ArticleSummary {
    /// Project a normalized entry, stripping markup from its summary
    pub fn from_entry(entry: FeedEntry) -> Self {
        let short_summary = entry.summary.as_deref().map(super::parser::html_to_text);

        Self {
            url: entry.url,
            title: entry.title,
            published_on: entry.published_on,
            short_summary,
        }
    }
}
