//! Resolver configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Image resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagingConfig {
    /// Longest edge, in pixels, kept after downscaling
    pub max_edge: u32,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Maximum cached images
    pub cache_capacity: u64,
    /// Cache time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Images fetched concurrently
    pub concurrency: usize,
}

impl ImagingConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With max edge
    #[inline]
    #[must_use]
    pub fn with_max_edge(mut self, max_edge: u32) -> Self {
        self.max_edge = max_edge;
        self
    }

    /// With JPEG quality, clamped to 1-100
    #[inline]
    #[must_use]
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// With fetch concurrency (at least 1)
    #[inline]
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[inline]
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self {
            max_edge: 1920,
            jpeg_quality: 85,
            cache_capacity: 1024,
            cache_ttl_secs: 3600,
            request_timeout_secs: 30,
            concurrency: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_embedding_policy() {
        let config = ImagingConfig::default();
        assert_eq!(config.max_edge, 1920);
        assert_eq!(config.jpeg_quality, 85);
    }

    #[test]
    fn builders_clamp() {
        let config = ImagingConfig::new().with_jpeg_quality(0).with_concurrency(0);
        assert_eq!(config.jpeg_quality, 1);
        assert_eq!(config.concurrency, 1);
    }
}
