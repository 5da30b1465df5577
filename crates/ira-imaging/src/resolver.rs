//! Image resolver seam
//!
//! A resolver turns an image reference (URL or inline data URI) into an
//! [`EmbeddedImage`], or reports it absent. It never returns an error: every
//! failure is logged and surfaces as `None`.

use crate::embedded::{is_data_uri, passthrough, EmbeddedImage};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Resolve image references into embeddable payloads
#[async_trait]
pub trait ImageResolver: Send + Sync {
    /// Resolve one reference; `None` when the image is unavailable
    async fn resolve(&self, source: &str) -> Option<Arc<EmbeddedImage>>;
}

/// Resolver that never touches the network
///
/// Inline data URIs pass through; everything else is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineOnlyResolver;

#[async_trait]
impl ImageResolver for InlineOnlyResolver {
    async fn resolve(&self, source: &str) -> Option<Arc<EmbeddedImage>> {
        if !is_data_uri(source) {
            tracing::debug!(source, "offline resolver skipping remote image");
            return None;
        }
        match passthrough(source) {
            Ok(image) => Some(Arc::new(image)),
            Err(e) => {
                tracing::warn!("inline image rejected: {}", e);
                None
            }
        }
    }
}

/// Outcome of resolving a batch of references
#[derive(Debug, Clone, Default)]
pub struct ResolvedImages {
    by_source: HashMap<String, Option<Arc<EmbeddedImage>>>,
}

impl ResolvedImages {
    /// Resolved image for `source`, if it was requested and succeeded
    #[must_use]
    pub fn get(&self, source: &str) -> Option<Arc<EmbeddedImage>> {
        self.by_source.get(source.trim()).cloned().flatten()
    }

    /// Number of distinct references requested
    #[inline]
    #[must_use]
    pub fn requested(&self) -> usize {
        self.by_source.len()
    }

    /// Number of references that resolved
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.by_source.values().filter(|v| v.is_some()).count()
    }
}

/// Resolve many references with bounded concurrency
///
/// Duplicates and blank references are requested once / skipped.
pub async fn resolve_all<R, I, S>(resolver: &R, sources: I, concurrency: usize) -> ResolvedImages
where
    R: ImageResolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = Vec::new();
    for source in sources {
        let source = source.as_ref().trim();
        if !source.is_empty() && seen.insert(source.to_string()) {
            unique.push(source.to_string());
        }
    }

    let by_source = stream::iter(unique)
        .map(|source| async move {
            let image = resolver.resolve(&source).await;
            (source, image)
        })
        .buffer_unordered(concurrency.max(1))
        .collect::<HashMap<_, _>>()
        .await;

    let resolved = ResolvedImages { by_source };
    tracing::info!(
        requested = resolved.requested(),
        resolved = resolved.resolved(),
        "images resolved"
    );
    resolved
}
