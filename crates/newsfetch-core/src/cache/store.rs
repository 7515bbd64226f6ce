use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::FetchCache;
use crate::config::AppConfig;
use crate::{Error, Result};

const SIMPLE_FETCH_SUFFIX: &str = "__cached_simple_fetch.json";
const ARTICLES_INFO_SUFFIX: &str = "__cached_articles_info.json";

/// Persistence strategy for [`FetchCache`]
pub trait CacheStore: Send + Sync {
    /// Read the whole cache; absent storage yields an empty cache
    fn load(&self) -> Result<FetchCache>;

    /// Replace the stored cache with `cache`
    fn save(&self, cache: &FetchCache) -> Result<()>;
}

/// Two flat JSON files, one per map, rewritten in full on every save
///
/// Writes are neither atomic nor locked against other processes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    simple_fetch_path: PathBuf,
    articles_info_path: PathBuf,
}

impl JsonFileStore {
    /// Files are named `<name>__cached_simple_fetch.json` and
    /// `<name>__cached_articles_info.json` inside `dir`
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            simple_fetch_path: dir.join(format!("{}{}", name, SIMPLE_FETCH_SUFFIX)),
            articles_info_path: dir.join(format!("{}{}", name, ARTICLES_INFO_SUFFIX)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.cache_dir(), &config.cache.name)
    }

    pub fn simple_fetch_path(&self) -> &Path {
        &self.simple_fetch_path
    }

    pub fn articles_info_path(&self) -> &Path {
        &self.articles_info_path
    }

    fn read_map<V: DeserializeOwned>(path: &Path) -> Result<HashMap<String, V>> {
        if !path.is_file() {
            return Ok(HashMap::new());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            tracing::error!("Corrupt cache file {}: {}", path.display(), e);
            Error::Json(e)
        })
    }

    fn write_map<V: Serialize>(path: &Path, map: &HashMap<String, V>) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string(map)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl CacheStore for JsonFileStore {
    fn load(&self) -> Result<FetchCache> {
        let cache = FetchCache {
            simple_fetch: Self::read_map(&self.simple_fetch_path)?,
            articles_info: Self::read_map(&self.articles_info_path)?,
        };

        tracing::debug!(
            "Loaded cache: {} headline lists, {} articles",
            cache.simple_fetch.len(),
            cache.articles_info.len()
        );

        Ok(cache)
    }

    fn save(&self, cache: &FetchCache) -> Result<()> {
        Self::write_map(&self.simple_fetch_path, &cache.simple_fetch)?;
        Self::write_map(&self.articles_info_path, &cache.articles_info)?;
        Ok(())
    }
}

/// Keeps the last saved snapshot in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<FetchCache>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, as if it had been saved before
    pub fn with_snapshot(cache: FetchCache) -> Self {
        Self {
            snapshot: Mutex::new(cache),
            saves: Mutex::new(0),
        }
    }

    pub fn snapshot(&self) -> FetchCache {
        self.snapshot.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|n| *n).unwrap_or(0)
    }
}

impl CacheStore for MemoryStore {
    fn load(&self) -> Result<FetchCache> {
        Ok(self.snapshot())
    }

    fn save(&self, cache: &FetchCache) -> Result<()> {
        let mut snapshot = self.snapshot
            .lock()
            .map_err(|e| Error::Other(format!("Cache lock poisoned: {}", e)))?;
        *snapshot = cache.clone();

        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleInfo;
    use crate::feed::ArticleSummary;
    use chrono::{TimeZone, Utc};

    fn sample_cache() -> FetchCache {
        let mut cache = FetchCache::default();
        cache.simple_fetch.insert(
            "URL<None>".to_string(),
            vec![ArticleSummary {
                url: "https://example.com/a".to_string(),
                title: "A".to_string(),
                published_on: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
                short_summary: None,
            }],
        );
        cache.articles_info.insert(
            "URL<https://example.com/a>".to_string(),
            ArticleInfo {
                text: Some("<p>Body</p>".to_string()),
                plain_text: Some("Body".to_string()),
                status_code: Some(200),
                success: true,
            },
        );
        cache
    }

    #[test]
    fn test_file_names() {
        let store = JsonFileStore::new("/tmp/cache", "fetcher");
        assert_eq!(
            store.simple_fetch_path(),
            Path::new("/tmp/cache/fetcher__cached_simple_fetch.json")
        );
        assert_eq!(
            store.articles_info_path(),
            Path::new("/tmp/cache/fetcher__cached_articles_info.json")
        );
    }

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path(), "fetcher");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path(), "fetcher");
        let cache = sample_cache();

        store.save(&cache).unwrap();
        assert_eq!(store.load().unwrap(), cache);
    }

    #[test]
    fn test_file_format_is_flat_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path(), "fetcher");
        store.save(&sample_cache()).unwrap();

        let raw = std::fs::read_to_string(store.articles_info_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["URL<https://example.com/a>"]["plain_text"], "Body");
        assert_eq!(value["URL<https://example.com/a>"]["status_code"], 200);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path(), "fetcher");
        std::fs::write(store.simple_fetch_path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(Error::Json(_))));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemoryStore::new();
        store.save(&sample_cache()).unwrap();
        store.save(&sample_cache()).unwrap();

        assert_eq!(store.save_count(), 2);
        assert_eq!(store.load().unwrap(), sample_cache());
    }
}
