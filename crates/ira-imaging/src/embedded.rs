//! Embeddable image payloads and inline data URIs

use crate::error::ImageError;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Image ready to embed in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedImage {
    /// MIME type of the payload
    pub mime_type: String,
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
    /// Pixel dimensions, unknown for pass-through inline data
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl EmbeddedImage {
    /// Build from encoded bytes
    #[must_use]
    pub fn from_bytes(mime_type: &str, bytes: &[u8], width: u32, height: u32) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            mime_type: mime_type.to_string(),
            data_uri: format!("data:{mime_type};base64,{payload}"),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Decoded payload bytes
    ///
    /// # Errors
    /// [`ImageError::MalformedDataUri`] if the stored URI is not base64 data.
    pub fn bytes(&self) -> Result<Vec<u8>, ImageError> {
        let (_, payload) = split_data_uri(&self.data_uri)?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|_| ImageError::MalformedDataUri)
    }
}

/// True for `data:` URIs (already embedded images)
#[inline]
#[must_use]
pub fn is_data_uri(source: &str) -> bool {
    source
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

fn split_data_uri(source: &str) -> Result<(&str, &str), ImageError> {
    let rest = source.get(5..).ok_or(ImageError::MalformedDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(ImageError::MalformedDataUri)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(ImageError::MalformedDataUri)?;
    if !mime.starts_with("image/") || payload.is_empty() {
        return Err(ImageError::MalformedDataUri);
    }
    Ok((mime, payload))
}

/// Accept an inline image unchanged
///
/// # Errors
/// [`ImageError::MalformedDataUri`] unless `source` is a base64 image URI.
pub fn passthrough(source: &str) -> Result<EmbeddedImage, ImageError> {
    let (mime, _) = split_data_uri(source)?;
    Ok(EmbeddedImage {
        mime_type: mime.to_string(),
        data_uri: source.to_string(),
        width: None,
        height: None,
    })
}
