use super::normalization::quantize;
use crate::types::IntensityBounds;
use image::GrayImage;

/// Stretch `[low, high]` onto `[0, 255]`.
///
/// Each sample becomes `(x - low) * 255 / (high - low)`, truncated and
/// clamped to 8 bits. When `high - low <= 0` the image is returned unchanged.
#[must_use]
pub fn stretch(mut image: GrayImage, bounds: IntensityBounds) -> GrayImage {
    if !bounds.is_stretchable() {
        return image;
    }

    let low = f64::from(bounds.low);
    let span = f64::from(bounds.span());

    // 256-entry lookup table, every sample is a byte
    let lut: [u8; 256] =
        std::array::from_fn(|level| quantize((level as f64 - low) * 255.0_f64 / span));

    for pixel in image.iter_mut() {
        *pixel = lut[usize::from(*pixel)];
    }

    image
}
