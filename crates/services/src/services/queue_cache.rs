use std::time::Duration;

use db::models::cache_reset_event::QueueCacheKey;
use moka::future::Cache;

use super::config::CacheConfig;

/// Cached per-queue state, keyed by the queue/customer/employee triple.
///
/// Uses moka's async cache with TTL-based expiration. Entries are evicted
/// early when a `CacheResetEvent` for their key is dispatched.
pub struct QueueCache {
    cache: Cache<QueueCacheKey, serde_json::Value>,
}

impl QueueCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_ttl(Duration::from_secs(config.ttl_secs), config.max_capacity)
    }

    pub fn with_ttl(ttl: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    pub async fn get(&self, key: QueueCacheKey) -> Option<serde_json::Value> {
        self.cache.get(&key).await
    }

    pub async fn insert(&self, key: QueueCacheKey, value: serde_json::Value) {
        self.cache.insert(key, value).await;
    }

    /// Removes the entry for `key`, returning it if one was cached.
    pub async fn invalidate(&self, key: QueueCacheKey) -> Option<serde_json::Value> {
        self.cache.remove(&key).await
    }

    pub fn contains(&self, key: QueueCacheKey) -> bool {
        self.cache.contains_key(&key)
    }

    /// Approximate number of live entries.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

impl Default for QueueCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
