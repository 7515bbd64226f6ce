use std::sync::Arc;

use crate::article::{article_plain_text, ArticleInfo};
use crate::cache::{article_key, simple_fetch_key, CacheStore, FetchCache, JsonFileStore};
use crate::config::AppConfig;
use crate::domain;
use crate::feed::{default_feeds, ArticleSummary, Feed, FeedEntry, FeedFetcher, FetchReport};
use crate::http::{HttpClient, ReqwestClient};
use crate::Result;

/// Supplies news headlines and article text, memoizing successful results
///
/// Every request runs to completion before the next one starts. When a store
/// is configured the whole cache is written back after each insertion.
pub struct Fetcher {
    client: Arc<dyn HttpClient>,
    feeds: FeedFetcher,
    cache: FetchCache,
    store: Option<Arc<dyn CacheStore>>,
}

impl Fetcher {
    /// Create a fetcher using reqwest and, if requested, the JSON cache files
    pub fn new(config: &AppConfig, use_storage_for_cache: bool) -> Result<Self> {
        let client: Arc<dyn HttpClient> = Arc::new(ReqwestClient::new(&config.sync)?);

        let store: Option<Arc<dyn CacheStore>> = if use_storage_for_cache {
            Some(Arc::new(JsonFileStore::from_config(config)))
        } else {
            None
        };

        Self::with_client(client, store)
    }

    /// Create a fetcher from explicit network and persistence strategies
    pub fn with_client(
        client: Arc<dyn HttpClient>,
        store: Option<Arc<dyn CacheStore>>,
    ) -> Result<Self> {
        let cache = match &store {
            Some(store) => store.load()?,
            None => FetchCache::default(),
        };

        Ok(Self {
            feeds: FeedFetcher::new(Arc::clone(&client)),
            client,
            cache,
            store,
        })
    }

    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    /// Fetch raw entries from `sources` (or the built-in feeds), newest first
    ///
    /// Sources that fail are logged and left out.
    pub async fn fetch(&self, sources: Option<&[Feed]>) -> Vec<FeedEntry> {
        self.fetch_report(sources).await.entries
    }

    /// Same as [`Fetcher::fetch`], also returning the sources that failed
    pub async fn fetch_report(&self, sources: Option<&[Feed]>) -> FetchReport {
        match sources {
            Some(feeds) if !feeds.is_empty() => self.feeds.fetch_all(feeds).await,
            _ => self.feeds.fetch_all(&default_feeds()).await,
        }
    }

    /// Fetch headlines in simplified form
    ///
    /// With `cached`, a previous non-empty result for the same set of sources
    /// is returned as is, and a new non-empty result is remembered.
    pub async fn simple_fetch(&mut self, sources: Option<&[Feed]>, cached: bool) -> Vec<ArticleSummary> {
        let key = simple_fetch_key(sources);

        if cached {
            if let Some(summaries) = self.cache.simple_fetch.get(&key) {
                tracing::debug!("Cache hit for {}", key);
                return summaries.clone();
            }
        }

        let summaries: Vec<ArticleSummary> = self
            .fetch(sources)
            .await
            .into_iter()
            .map(ArticleSummary::from_entry)
            .collect();

        if cached && !summaries.is_empty() {
            self.cache.simple_fetch.insert(key, summaries.clone());
            self.flush();
        }

        summaries
    }

    /// Host of an absolute http(s) URL
    pub fn get_url_domain(&self, url: &str) -> Option<String> {
        domain::get_url_domain(url)
    }

    /// Download an article and extract its plain text
    ///
    /// Never fails: transport errors, non-2xx statuses and extraction failures
    /// all come back as a record with `success == false`. Only successful
    /// records are cached.
    pub async fn retrieve_article_info(&mut self, url: &str, cached: bool) -> ArticleInfo {
        let key = article_key(url);

        if cached {
            if let Some(info) = self.cache.articles_info.get(&key) {
                tracing::debug!("Cache hit for {}", key);
                return info.clone();
            }
        }

        tracing::info!("Retrieving article: {}", url);

        let response = match self.client.get_text(url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request failed for {}: {}", url, e);
                return ArticleInfo::transport_failure(e.to_string());
            }
        };

        let succeeded = response.is_success();
        let status = response.status;
        let mut info = ArticleInfo::from_response(status, response.text);

        if !succeeded {
            tracing::warn!("HTTP {} for article {}", status, url);
            return info;
        }

        match article_plain_text(info.text.as_deref().unwrap_or_default()) {
            Ok(plain_text) => {
                info.plain_text = Some(plain_text);
                info.success = true;
            }
            Err(e) => {
                tracing::warn!("Could not extract text from {}: {}", url, e);
                return info;
            }
        }

        if cached {
            self.cache.articles_info.insert(key, info.clone());
            self.flush();
        }

        info
    }

    /// Plain text of an article, or `Error <status>` when it could not be retrieved
    #[deprecated(note = "use `retrieve_article_info` and inspect `success` instead")]
    pub async fn retrieve_article_contents(&mut self, url: &str) -> String {
        self.retrieve_article_info(url, true).await.contents()
    }

    /// Write the whole cache to the configured store
    pub fn save_cache(&self) -> Result<()> {
        match &self.store {
            Some(store) => store.save(&self.cache),
            None => {
                tracing::debug!("No cache store configured, skipping save");
                Ok(())
            }
        }
    }

    /// Replace the in-memory cache with the stored one
    pub fn load_cache(&mut self) -> Result<()> {
        if let Some(store) = &self.store {
            self.cache = store.load()?;
        }
        Ok(())
    }

    fn flush(&self) {
        if let Err(e) = self.save_cache() {
            tracing::error!("Failed to persist cache: {}", e);
        }
    }
}
