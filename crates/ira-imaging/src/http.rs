//! HTTP-backed image resolver
//!
//! Cache lookup, then fetch (trying alternate URL spellings), then transcode
//! on the blocking pool, then cache. Inline data URIs skip all of it.

use crate::cache::ImageCache;
use crate::config::ImagingConfig;
use crate::embedded::{is_data_uri, passthrough, EmbeddedImage};
use crate::error::ImageError;
use crate::resolver::ImageResolver;
use crate::transcode::transcode;
use crate::url::candidate_urls;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;

/// Resolver fetching remote images over HTTP
#[derive(Debug, Clone)]
pub struct HttpImageResolver {
    client: reqwest::Client,
    cache: ImageCache,
    config: ImagingConfig,
}

impl HttpImageResolver {
    /// Create resolver with its own client and cache
    ///
    /// # Errors
    /// Fails if the TLS backend cannot be initialized.
    pub fn new(config: ImagingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let cache = ImageCache::with_ttl(config.cache_capacity, config.cache_ttl());
        Ok(Self::with_parts(client, cache, config))
    }

    /// Create resolver from an existing client and cache
    #[inline]
    #[must_use]
    pub fn with_parts(client: reqwest::Client, cache: ImageCache, config: ImagingConfig) -> Self {
        Self {
            client,
            cache,
            config,
        }
    }

    #[inline]
    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ImagingConfig {
        &self.config
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ImageError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ImageError::Fetch {
            url: url.to_string(),
            source,
        })?;
        if body.is_empty() {
            return Err(ImageError::EmptyBody {
                url: url.to_string(),
            });
        }
        Ok(body.to_vec())
    }

    /// Fetch the first spelling of `source` that answers with a body
    async fn fetch_any(&self, source: &str) -> Result<Vec<u8>, ImageError> {
        let mut last_error = None;
        for url in candidate_urls(source) {
            match self.fetch(&url).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() => {
                    tracing::debug!("image fetch attempt failed: {}", e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_error.unwrap_or(ImageError::EmptyBody {
            url: source.to_string(),
        }))
    }

    async fn load(&self, source: &str) -> Result<EmbeddedImage, ImageError> {
        if is_data_uri(source) {
            return passthrough(source);
        }
        let body = self.fetch_any(source).await?;
        let max_edge = self.config.max_edge;
        let quality = self.config.jpeg_quality;
        tokio::task::spawn_blocking(move || transcode(&body, max_edge, quality))
            .await
            .map_err(|e| ImageError::Worker(e.to_string()))?
    }
}

#[async_trait]
impl ImageResolver for HttpImageResolver {
    async fn resolve(&self, source: &str) -> Option<Arc<EmbeddedImage>> {
        if let Some(cached) = self.cache.get(source).await {
            return Some(cached);
        }
        match self.load(source).await {
            Ok(image) => {
                let image = Arc::new(image);
                self.cache.insert(source, Arc::clone(&image)).await;
                Some(image)
            }
            Err(e) => {
                tracing::warn!("image unavailable, rendering without it: {}", e);
                None
            }
        }
    }
}
