//! Domain-specific value types shared by the pipeline stages

use std::fmt;

/// Volume extents along x, y and z
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub nx: u32,
    pub ny: u32,
    pub nz: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(nx: u32, ny: u32, nz: u32) -> Self {
        Self { nx, ny, nz }
    }

    #[inline]
    #[must_use]
    pub fn voxel_count(&self) -> u64 {
        u64::from(self.nx) * u64::from(self.ny) * u64::from(self.nz)
    }

    /// First row of the centre slice in the stacked 2D layout
    #[inline]
    #[must_use]
    pub fn center_row(&self) -> u64 {
        u64::from(self.ny) * u64::from(self.nz / 2)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{nx}x{ny}x{nz}", nx = self.nx, ny = self.ny, nz = self.nz)
    }
}

/// Target box for a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{width}x{height}", width = self.width, height = self.height)
    }
}

/// Clipped intensity range that gets stretched to full contrast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityBounds {
    pub low: u8,
    pub high: u8,
}

impl IntensityBounds {
    #[must_use]
    pub fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// `high - low`, negative when the bounds are inverted
    #[inline]
    #[must_use]
    pub fn span(&self) -> i16 {
        i16::from(self.high) - i16::from(self.low)
    }

    #[inline]
    #[must_use]
    pub fn is_stretchable(&self) -> bool {
        self.span() > 0
    }
}

impl fmt::Display for IntensityBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "low={low}, high={high}", low = self.low, high = self.high)
    }
}
