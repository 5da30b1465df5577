//! Resolved-image cache using moka
//!
//! Keyed by the source reference exactly as it appears in the report input,
//! so repeated references across reports skip the fetch and transcode.

use crate::embedded::EmbeddedImage;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Concurrent image cache
///
/// Only successful resolutions are stored; failures are retried on the next
/// lookup.
#[derive(Debug, Clone)]
pub struct ImageCache {
    inner: Cache<String, Arc<EmbeddedImage>>,
}

impl ImageCache {
    /// Create new cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Create cache with time-based expiration
    #[inline]
    #[must_use]
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    #[inline]
    pub async fn insert(&self, source: &str, image: Arc<EmbeddedImage>) {
        self.inner.insert(source.to_string(), image).await;
    }

    #[inline]
    #[must_use]
    pub async fn get(&self, source: &str) -> Option<Arc<EmbeddedImage>> {
        self.inner.get(source).await
    }

    #[inline]
    pub async fn invalidate(&self, source: &str) {
        self.inner.invalidate(source).await;
    }

    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Get cache statistics
    ///
    /// Counts are eventually consistent; call
    /// [`ImageCache::sync`] first when an exact figure matters.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }

    /// Flush pending maintenance so counts are exact
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

impl Default for ImageCache {
    /// Create cache with default capacity (1,024 entries)
    fn default() -> Self {
        Self::new(1_024)
    }
}
