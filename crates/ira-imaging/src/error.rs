//! Error types for image resolution
//!
//! These never leave the resolver: [`crate::ImageResolver::resolve`] logs them
//! and reports the image as absent.

/// Image pipeline error
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Transport failure (DNS, connect, timeout, body read)
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with something other than 200
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Server answered 200 with no body
    #[error("empty body for {url}")]
    EmptyBody { url: String },

    /// Bytes are not a decodable image
    #[error("decode failed: {0}")]
    Decode(#[source] image::ImageError),

    /// Re-encoding to JPEG failed
    #[error("encode failed: {0}")]
    Encode(#[source] image::ImageError),

    /// Inline data URI is malformed
    #[error("malformed data uri")]
    MalformedDataUri,

    /// Blocking transcode task panicked or was cancelled
    #[error("transcode worker failed: {0}")]
    Worker(String),
}

impl ImageError {
    /// Check if another URL encoding might succeed
    ///
    /// Decode failures mean the bytes arrived and are bad; retrying the same
    /// resource under a different spelling will not help.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Status { .. } | Self::EmptyBody { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_is_retryable() {
        let err = ImageError::Status {
            url: "http://x/a.png".to_string(),
            status: 404,
        };
        assert!(err.is_retryable());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn malformed_data_uri_is_not_retryable() {
        assert!(!ImageError::MalformedDataUri.is_retryable());
    }
}
