use crate::error::ProcessError;
use crate::types::Size;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};
use log::debug;
use std::path::Path;

/// Resize to fit inside `size`, keeping the aspect ratio
#[must_use]
pub fn resize(slice: &GrayImage, size: Size) -> DynamicImage {
    DynamicImage::ImageLuma8(slice.clone()).resize(size.width, size.height, FilterType::Lanczos3)
}

/// Resize the slice and save it; the encoder follows the path extension
///
/// Returns the size actually written.
pub fn write_resized(slice: &GrayImage, size: Size, path: &Path) -> Result<Size, ProcessError> {
    let resized = resize(slice, size);
    let written = Size::new(resized.width(), resized.height());

    resized.save(path).map_err(|source| ProcessError::SaveFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {written} image to {}", path.display());
    Ok(written)
}
