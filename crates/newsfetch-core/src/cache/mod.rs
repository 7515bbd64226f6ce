mod store;

pub use store::{CacheStore, JsonFileStore, MemoryStore};

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::article::ArticleInfo;
use crate::feed::{ArticleSummary, Feed};

/// In-memory results of previous fetches, keyed by request
///
/// Entries are only ever inserted after a successful fetch; nothing expires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchCache {
    pub simple_fetch: HashMap<String, Vec<ArticleSummary>>,
    pub articles_info: HashMap<String, ArticleInfo>,
}

impl FetchCache {
    pub fn is_empty(&self) -> bool {
        self.simple_fetch.is_empty() && self.articles_info.is_empty()
    }
}

/// Key for a headline request
///
/// `None` (or no sources) means the built-in list and maps to `URL<None>`.
/// Explicit sources are keyed by their de-duplicated, sorted URLs so the order
/// they were passed in does not matter.
pub fn simple_fetch_key(sources: Option<&[Feed]>) -> String {
    match sources {
        Some(feeds) if !feeds.is_empty() => {
            let urls: BTreeSet<&str> = feeds.iter().map(|f| f.url.as_str()).collect();
            let urls: Vec<&str> = urls.into_iter().collect();
            format!("URL<{{{}}}>", urls.join(", "))
        }
        _ => "URL<None>".to_string(),
    }
}

/// Key for an article request
pub fn article_key(url: &str) -> String {
    format!("URL<{}>", url)
}
