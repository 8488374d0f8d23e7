use crate::volume::Volume;
use anyhow::{Context, Result};
use image::{GrayImage, ImageBuffer};
use log::debug;

#[inline]
#[must_use]
pub fn find_min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &val| {
            (min.min(val), max.max(val))
        })
}

/// Truncate toward zero and clamp into the 8-bit range. NaN maps to 0.
#[inline]
#[must_use]
pub fn quantize(value: f64) -> u8 {
    // Saturating cast: values < 0 become 0, values > 255 become 255
    value as u8
}

/// Linearly map the full range of the volume onto `[0, 255]`
///
/// A flat volume (or one without finite samples) maps to all zeros.
pub fn rescale_to_u8(volume: &Volume) -> Result<GrayImage> {
    let (min_val, max_val) = find_min_max(volume.samples());
    debug!("Raw intensity range [{min_val}, {max_val}]");

    let range = if max_val > min_val {
        max_val - min_val
    } else {
        1.0_f64
    };
    let min_val = if min_val.is_finite() { min_val } else { 0.0 };

    let pixels: Vec<u8> = volume
        .samples()
        .iter()
        .map(|&value| quantize((value - min_val) / range * 255.0_f64))
        .collect();

    let image: GrayImage = ImageBuffer::from_raw(volume.width(), volume.height(), pixels)
        .context("Failed to create grayscale image buffer")?;

    Ok(image)
}
