//! Crop-and-scale of provider-returned images to exact platform dimensions.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

/// Output JPEG quality for fitted ad images.
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode fitted image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decodes raw image bytes and fits them to exactly (width, height): the
/// image is scaled to fully cover the target box, centered, and the overflow
/// cropped symmetrically. Lanczos3 keeps the downscale free of aliasing.
pub fn fit_raster(bytes: &[u8], width: u32, height: u32) -> Result<DynamicImage, FitError> {
    let decoded = image::load_from_memory(bytes).map_err(FitError::Decode)?;
    let fitted = decoded.resize_to_fill(width, height, FilterType::Lanczos3);
    // Drop alpha or extended channel layouts; ad output is 3-channel JPEG.
    Ok(DynamicImage::ImageRgb8(fitted.to_rgb8()))
}

pub fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>, FitError> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(FitError::Encode)?;
    Ok(buf.into_inner())
}

pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, FitError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(FitError::Encode)?;
    Ok(buf.into_inner())
}

/// Fit raw image bytes to (width, height) and re-encode as compressed JPEG.
/// Callers decide what a failure means: the asset path substitutes the
/// original bytes, the animation path skips the frame.
pub fn fit_cover(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, FitError> {
    let fitted = fit_raster(bytes, width, height)?;
    encode_jpeg(&fitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        encode_png(&img).unwrap()
    }

    #[test]
    fn fit_cover_produces_exact_dimensions() {
        let source = sample_png(640, 480);
        let fitted = fit_cover(&source, 300, 500).unwrap();
        let decoded = image::load_from_memory(&fitted).unwrap();
        assert_eq!(decoded.width(), 300);
        assert_eq!(decoded.height(), 500);
    }

    #[test]
    fn fit_cover_output_is_jpeg() {
        let source = sample_png(100, 100);
        let fitted = fit_cover(&source, 50, 50).unwrap();
        assert_eq!(&fitted[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn fit_cover_handles_upscale() {
        let source = sample_png(64, 64);
        let fitted = fit_cover(&source, 128, 96).unwrap();
        let decoded = image::load_from_memory(&fitted).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (128, 96));
    }

    #[test]
    fn fit_cover_rejects_undecodable_bytes() {
        let result = fit_cover(b"definitely not an image", 100, 100);
        assert!(matches!(result, Err(FitError::Decode(_))));
    }

    #[test]
    fn fit_raster_strips_alpha() {
        let rgba = DynamicImage::new_rgba8(40, 40);
        let source = encode_png(&rgba).unwrap();
        let fitted = fit_raster(&source, 20, 20).unwrap();
        assert_eq!(fitted.color(), image::ColorType::Rgb8);
    }
}
