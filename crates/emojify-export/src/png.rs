//! PNG export format
//!
//! Encodes finished emoji bitmaps with the `image` crate.

use emojify_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};
use image::{ImageBuffer, ImageEncoder, RgbaImage};

/// Encode a straight-alpha RGBA bitmap as PNG
///
/// Returns a valid PNG with IHDR, IDAT and IEND chunks. Transparent
/// pixels stay transparent.
pub fn encode_bitmap_to_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(ExportError::EncodingFailed(format!(
            "Cannot encode an empty {}x{} image",
            bitmap.width, bitmap.height
        ))
        .into());
    }

    let expected_size = (bitmap.width * bitmap.height * 4) as usize;
    if bitmap.data.len() < expected_size {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer too small: expected {} bytes for {}x{} {:?}, got {}",
            expected_size,
            bitmap.width,
            bitmap.height,
            bitmap.format,
            bitmap.data.len()
        ))
        .into());
    }

    let img: RgbaImage = ImageBuffer::from_raw(
        bitmap.width,
        bitmap.height,
        bitmap.data[..expected_size].to_vec(),
    )
    .ok_or_else(|| ExportError::EncodingFailed("Failed to create image buffer from RGBA data".into()))?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(img.as_raw(), bitmap.width, bitmap.height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for finished emoji
///
/// ```ignore
/// use emojify_export::PngExporter;
/// let exporter = PngExporter::new();
/// ```
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_bitmap_to_png(bitmap)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}
