//! Intensity normalization
//!
//! Two stages: a global min/max rescale onto 8 bits, then a percentile
//! stretch driven by the cumulative histogram of the whole rescaled volume.

mod histogram;
mod normalization;
mod stretch;

pub use histogram::{CumulativeHistogram, Histogram, BUCKETS};
pub use normalization::{find_min_max, quantize, rescale_to_u8};
pub use stretch::stretch;

use crate::types::IntensityBounds;
use crate::volume::Volume;
use anyhow::Result;
use image::GrayImage;
use log::debug;

/// Normalized 8-bit image and the bounds that produced it
#[derive(Debug, Clone)]
pub struct Normalized {
    pub image: GrayImage,
    pub bounds: IntensityBounds,
}

/// Rescale a volume to 8 bits and stretch it between its percentile bounds
///
/// # Errors
///
/// Returns an error if the rescaled image buffer cannot be built
pub fn normalize(volume: &Volume, percentile: u8) -> Result<Normalized> {
    let rescaled = rescale_to_u8(volume)?;

    // Histogram over the whole volume, not just the slice shown later
    let cumulative = Histogram::from_image(&rescaled).cumulative();
    let bounds = cumulative.percentile_bounds(percentile);
    debug!(
        "Percentile {percentile}: {bounds} over {} samples",
        cumulative.total()
    );

    if !bounds.is_stretchable() {
        debug!("Empty intensity span, keeping rescaled values");
    }

    Ok(Normalized {
        image: stretch(rescaled, bounds),
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::Metadata;

    fn volume(width: u32, height: u32, samples: Vec<f64>) -> Volume {
        Volume::new(width, height, samples, Metadata::new()).unwrap()
    }

    #[test]
    fn test_uniform_volume_output_equals_rescaled() {
        let volume = volume(4, 4, vec![812.0; 16]);
        let rescaled = rescale_to_u8(&volume).unwrap();
        let normalized = normalize(&volume, 0).unwrap();

        assert_eq!(normalized.bounds.span(), 0);
        assert_eq!(normalized.image, rescaled);
    }

    #[test]
    fn test_default_percentile_keeps_low_at_zero() {
        // Four levels that rescale to 0, 85, 170, 255
        let samples: Vec<f64> = (0..16).map(|i| f64::from(i / 4) * 100.0).collect();
        let normalized = normalize(&volume(4, 4, samples), 0).unwrap();

        assert_eq!(normalized.bounds, IntensityBounds::new(0, 254));
        let raw = normalized.image.as_raw();
        assert_eq!(raw[0], 0);
        // 85 * 255 / 254 = 85.33
        assert_eq!(raw[4], 85);
        // 170 * 255 / 254 = 170.67
        assert_eq!(raw[8], 170);
        assert_eq!(raw[12], 255);
    }

    #[test]
    fn test_histogram_total_matches_volume() {
        let samples: Vec<f64> = (0..60).map(f64::from).collect();
        let volume = volume(3, 20, samples);
        let rescaled = rescale_to_u8(&volume).unwrap();
        let cumulative = Histogram::from_image(&rescaled).cumulative();
        assert_eq!(cumulative.total(), 60);
    }

    #[test]
    fn test_percentile_clips_outliers() {
        // 98 mid samples and one outlier at each end
        let mut samples = vec![500.0; 98];
        samples.push(0.0);
        samples.push(1000.0);
        let normalized = normalize(&volume(10, 10, samples), 5).unwrap();

        // Outliers rescale to 0 and 255, mid samples to 127
        // 5%: low < 5 is met up to 126, high < 95 up to 126 as well
        assert_eq!(normalized.bounds, IntensityBounds::new(126, 126));
        assert!(!normalized.bounds.is_stretchable());
    }
}
