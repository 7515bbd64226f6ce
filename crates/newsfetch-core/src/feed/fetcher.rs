use std::sync::Arc;

use super::models::{Feed, FeedEntry};
use super::parser::parse_feed;
use crate::http::HttpClient;
use crate::{Error, Result};

const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;

/// A source that could not be fetched or parsed
#[derive(Debug)]
pub struct SourceFailure {
    pub feed: Feed,
    pub error: Error,
}

/// Merged entries of a multi-source fetch, plus the sources that were dropped
#[derive(Debug, Default)]
pub struct FetchReport {
    pub entries: Vec<FeedEntry>,
    pub failures: Vec<SourceFailure>,
}

/// Downloads and parses feeds one source at a time
pub struct FeedFetcher {
    client: Arc<dyn HttpClient>,
}

impl FeedFetcher {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// Fetch and parse a single feed
    pub async fn fetch(&self, feed: &Feed) -> Result<Vec<FeedEntry>> {
        tracing::info!("Fetching feed {} from: {}", feed.name, feed.url);

        let response = self.client.get(&feed.url).await?;

        if !response.is_success() {
            return Err(Error::HttpStatus {
                status: response.status,
                url: feed.url.clone(),
            });
        }

        self.ensure_content_size(response.body.len(), &feed.url)?;

        parse_feed(&response.body, &feed.name)
    }

    /// Fetch every source in order and merge the entries, newest first
    ///
    /// The sort is stable, so entries with equal timestamps keep source order.
    pub async fn fetch_all(&self, feeds: &[Feed]) -> FetchReport {
        let mut report = FetchReport::default();

        for feed in feeds {
            match self.fetch(feed).await {
                Ok(entries) => {
                    tracing::info!("Feed '{}': {} entries", feed.name, entries.len());
                    report.entries.extend(entries);
                }
                Err(e) => {
                    tracing::warn!("Skipping feed '{}': {}", feed.name, e);
                    report.failures.push(SourceFailure {
                        feed: feed.clone(),
                        error: e,
                    });
                }
            }
        }

        report.entries.sort_by(|a, b| b.published_on.cmp(&a.published_on));
        report
    }

    fn ensure_content_size(&self, size: usize, url: &str) -> Result<()> {
        if size > MAX_FEED_BYTES {
            return Err(Error::FeedParse(format!(
                "Feed too large ({} bytes) for URL: {}",
                size,
                url
            )));
        }
        Ok(())
    }
}
