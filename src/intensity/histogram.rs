//! 256-bucket intensity histograms and percentile bounds

use crate::types::IntensityBounds;
use image::GrayImage;

pub const BUCKETS: usize = 256;

/// Per-level sample counts of an 8-bit image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; BUCKETS],
}

impl Histogram {
    #[must_use]
    pub fn from_image(image: &GrayImage) -> Self {
        let mut counts = [0u64; BUCKETS];
        for &value in image.as_raw() {
            counts[usize::from(value)] += 1;
        }
        Self { counts }
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u64; BUCKETS] {
        &self.counts
    }

    /// Running totals: bucket `i` counts samples `<= i`
    #[must_use]
    pub fn cumulative(&self) -> CumulativeHistogram {
        let mut counts = [0u64; BUCKETS];
        let mut running = 0u64;
        for (slot, &count) in counts.iter_mut().zip(self.counts.iter()) {
            running += count;
            *slot = running;
        }
        CumulativeHistogram { counts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeHistogram {
    counts: [u64; BUCKETS],
}

impl CumulativeHistogram {
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u64; BUCKETS] {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts[BUCKETS - 1]
    }

    /// Intensity bounds that exclude `percentile`% at each end.
    ///
    /// One ascending pass over levels `0..=254`: `low` follows the last level
    /// whose cumulative count is strictly below `total * p / 100`, `high` the
    /// last level strictly below `total * (100 - p) / 100`. Both start at 0
    /// and stay there if no level qualifies. `percentile` is capped at 100.
    #[must_use]
    pub fn percentile_bounds(&self, percentile: u8) -> IntensityBounds {
        let percentile = u64::from(percentile.min(100));
        let total = self.total();

        // cumulative < total * p / 100, kept in integers
        let low_threshold = total * percentile;
        let high_threshold = total * (100 - percentile);

        let mut low = 0u8;
        let mut high = 0u8;
        for level in 0..=u8::MAX - 1 {
            let scaled = self.counts[usize::from(level)] * 100;
            if scaled < low_threshold {
                low = level;
            }
            if scaled < high_threshold {
                high = level;
            }
        }

        IntensityBounds::new(low, high)
    }
}
