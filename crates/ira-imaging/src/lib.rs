//! IRA Imaging
//!
//! Resolves evidence and justification image references into payloads that
//! can be embedded in a document.
//!
//! # Core Concepts
//!
//! - [`ImageResolver`]: Async seam; returns an image or `None`, never an error
//! - [`HttpImageResolver`]: Cache → fetch (with alternate URL spellings) →
//!   flatten alpha → cap long edge → JPEG → base64 data URI
//! - [`InlineOnlyResolver`]: Offline resolver, inline data URIs only
//! - [`resolve_all`]: Deduplicated, bounded-concurrency batch resolution
//!
//! # Architecture
//!
//! ```text
//! reference → ImageCache ─hit──────────────────────────────→ EmbeddedImage
//!                 └─miss→ fetch(url variants) → transcode → ImageCache
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod cache;
mod config;
mod embedded;
mod error;
mod http;
mod resolver;
mod transcode;
mod url;

pub use cache::{CacheStats, ImageCache};
pub use config::ImagingConfig;
pub use embedded::{is_data_uri, passthrough, EmbeddedImage};
pub use error::ImageError;
pub use http::HttpImageResolver;
pub use resolver::{resolve_all, ImageResolver, InlineOnlyResolver, ResolvedImages};
pub use transcode::{transcode, JPEG_MIME};
pub use url::candidate_urls;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
