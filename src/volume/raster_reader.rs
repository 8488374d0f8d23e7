//! Fallback decoding for ordinary raster images

use super::{Metadata, Volume};
use anyhow::{Context, Result};
use image::ImageReader;
use std::path::Path;

/// Decode a raster image into a single-slice volume of luma samples.
///
/// Only `width`, `height` and `bands` are recorded, so the result never
/// passes NIfTI validation.
pub fn open_raster_file(path: &Path) -> Result<Volume> {
    let image = ImageReader::open(path)
        .with_context(|| format!("Failed to open image file: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image file: {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image file: {}", path.display()))?;

    let mut metadata = Metadata::new();
    metadata.insert("width", i64::from(image.width()));
    metadata.insert("height", i64::from(image.height()));
    metadata.insert("bands", i64::from(image.color().channel_count()));

    let luma = image.to_luma16();
    let samples = luma.pixels().map(|p| f64::from(p.0[0])).collect();

    Volume::new(luma.width(), luma.height(), samples, metadata)
}
