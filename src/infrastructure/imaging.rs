//! Photo downsizing and inline encoding

use crate::error::{MomoError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{
    codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage, GenericImageView, ImageReader,
};
use std::io::Cursor;
use std::path::Path;

/// Longest edge of a stored photo
pub const MAX_EDGE: u32 = 1024;

/// Fixed JPEG quality for re-encoded photos
const JPEG_QUALITY: u8 = 80;

/// Read an image file, bound it to [`MAX_EDGE`], and return it re-encoded
/// as base64 JPEG, ready to inline into an entry record.
pub fn encode_image_file(path: &Path) -> Result<String> {
    let reader = ImageReader::open(path)
        .map_err(|e| {
            MomoError::ImageDecode(format!("failed to open image {}: {}", path.display(), e))
        })?
        .with_guessed_format()
        .map_err(|e| {
            MomoError::ImageDecode(format!(
                "failed to detect image format {}: {}",
                path.display(),
                e
            ))
        })?;

    let source = reader.decode().map_err(|e| {
        MomoError::ImageDecode(format!("failed to decode image {}: {}", path.display(), e))
    })?;

    let bounded = downsize(source, MAX_EDGE);
    to_base64_jpeg(&bounded)
}

/// Proportionally scale so neither dimension exceeds `max_edge`: the longer
/// dimension is clamped, the other scaled by the same ratio. Images already
/// within the bound pass through untouched.
pub fn downsize(source: DynamicImage, max_edge: u32) -> DynamicImage {
    let (width, height) = source.dimensions();
    let longest = width.max(height);
    if longest <= max_edge.max(1) {
        return source;
    }

    let scale = max_edge as f64 / longest as f64;
    let target_width = ((width as f64) * scale).round().max(1.0) as u32;
    let target_height = ((height as f64) * scale).round().max(1.0) as u32;
    source.resize_exact(target_width, target_height, FilterType::Triangle)
}

fn to_base64_jpeg(image: &DynamicImage) -> Result<String> {
    let rgb = image.to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| MomoError::ImageDecode(format!("failed to re-encode image: {}", e)))?;
    Ok(STANDARD.encode(buffer.into_inner()))
}
