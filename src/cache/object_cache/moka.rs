use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 带独立 TTL 的缓存条目
#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// 按条目自身 TTL 过期，覆盖写入时重新计时
struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, Entry>,
    default_ttl: u64,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Ok(Self::with_capacity(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    pub fn with_capacity(max_capacity: u64, default_ttl: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry)
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, default TTL: {}s",
            max_capacity, default_ttl
        );
        Self { inner, default_ttl }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(entry) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(entry.value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let effective_ttl = if ttl == 0 { self.default_ttl } else { ttl };
        self.inner
            .insert(
                key,
                Entry {
                    value,
                    ttl: Duration::from_secs(effective_ttl),
                },
            )
            .await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_capacity(100, 60);
        cache
            .insert_raw("token:alice".to_string(), "abc".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("token:alice").await,
            CacheResult::Found("abc".to_string())
        );

        cache.remove("token:alice").await;
        assert_eq!(cache.get_raw("token:alice").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let cache = MokaCacheWrapper::with_capacity(100, 60);
        cache
            .insert_raw("token:bob".to_string(), "old".to_string(), 30)
            .await;
        cache
            .insert_raw("token:bob".to_string(), "new".to_string(), 30)
            .await;
        assert_eq!(
            cache.get_raw("token:bob").await.found(),
            Some("new".to_string())
        );
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = MokaCacheWrapper::with_capacity(100, 60);
        cache
            .insert_raw("token:carol".to_string(), "short".to_string(), 1)
            .await;
        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(cache.get_raw("token:carol").await, CacheResult::NotFound);
    }
}
