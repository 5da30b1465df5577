//! Normalize fetched bytes into an embeddable JPEG
//!
//! Decode, flatten transparency onto white, cap the long edge, re-encode.

use crate::embedded::EmbeddedImage;
use crate::error::ImageError;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

/// MIME type of every transcoded image
pub const JPEG_MIME: &str = "image/jpeg";

/// Transcode `bytes` into a JPEG data URI
///
/// # Errors
/// [`ImageError::Decode`] for unreadable input, [`ImageError::Encode`] if the
/// JPEG encoder fails.
pub fn transcode(bytes: &[u8], max_edge: u32, quality: u8) -> Result<EmbeddedImage, ImageError> {
    let decoded = image::load_from_memory(bytes).map_err(ImageError::Decode)?;
    let flattened = flatten_alpha(&decoded);
    let scaled = downscale(flattened, max_edge);
    let (width, height) = scaled.dimensions();

    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, quality.clamp(1, 100))
        .encode_image(&scaled)
        .map_err(ImageError::Encode)?;

    Ok(EmbeddedImage::from_bytes(JPEG_MIME, &encoded, width, height))
}

/// Composite onto a white background
fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = u32::from(a);
        let blend = |channel: u8| -> u8 {
            let mixed = (u32::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
            u8::try_from(mixed).unwrap_or(u8::MAX)
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Shrink so the long edge is at most `max_edge`; never enlarges
fn downscale(image: RgbImage, max_edge: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if max_edge == 0 || width.max(height) <= max_edge {
        return image;
    }
    DynamicImage::ImageRgb8(image)
        .resize(max_edge, max_edge, FilterType::Lanczos3)
        .to_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(image: &DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn transparent_pixels_become_white() {
        let clear = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let flat = flatten_alpha(&DynamicImage::ImageRgba8(clear));
        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255]);

        let opaque = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 255]));
        let flat = flatten_alpha(&DynamicImage::ImageRgba8(opaque));
        assert_eq!(flat.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn long_edge_is_capped_preserving_aspect() {
        let wide = DynamicImage::ImageRgb8(RgbImage::new(400, 100));
        let embedded = transcode(&png(&wide), 200, 85).unwrap();
        assert_eq!(embedded.width, Some(200));
        assert_eq!(embedded.height, Some(50));
        assert_eq!(embedded.mime_type, JPEG_MIME);
    }

    #[test]
    fn small_images_are_not_enlarged() {
        let small = DynamicImage::ImageRgb8(RgbImage::new(30, 20));
        let embedded = transcode(&png(&small), 1920, 85).unwrap();
        assert_eq!((embedded.width, embedded.height), (Some(30), Some(20)));
    }

    #[test]
    fn output_is_decodable_jpeg() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([200, 0, 0, 128])));
        let embedded = transcode(&png(&source), 1920, 85).unwrap();
        let bytes = embedded.bytes().unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = transcode(b"definitely not an image", 1920, 85).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }
}
