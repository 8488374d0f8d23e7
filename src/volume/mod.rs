//! Volume loading and validation
//!
//! A volume is held as a tall 2D array of samples: `nx` columns and
//! `ny * nz` rows, where each band of `ny` rows is one z slice. NIfTI files
//! are decoded by the `nifti` crate; anything else goes through the `image`
//! crate and ends up without NIfTI metadata.

mod metadata;
mod nifti_reader;
mod raster_reader;
mod validation;

pub use metadata::{Metadata, MetadataValue};
pub use metadata::{
    NIFTI_DATATYPE, NIFTI_DESCRIP, NIFTI_DX, NIFTI_DY, NIFTI_DZ, NIFTI_NDIM, NIFTI_NT, NIFTI_NX,
    NIFTI_NY, NIFTI_NZ, NIFTI_QFORM_CODE, NIFTI_SCL_INTER, NIFTI_SCL_SLOPE, NIFTI_SFORM_CODE,
};
pub use nifti_reader::open_nifti_file;
pub use raster_reader::open_raster_file;
pub use validation::validate_nifti;

use anyhow::{ensure, Result};
use log::debug;
use std::path::Path;

/// Decoded scalar samples plus their metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    width: u32,
    height: u32,
    samples: Vec<f64>,
    metadata: Metadata,
}

impl Volume {
    /// Build a volume from row-major samples (x varies fastest)
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` does not hold `width * height` values
    pub fn new(width: u32, height: u32, samples: Vec<f64>, metadata: Metadata) -> Result<Self> {
        let expected = u64::from(width) * u64::from(height);
        ensure!(
            samples.len() as u64 == expected,
            "Sample count {} does not match {width}x{height} volume",
            samples.len()
        );

        Ok(Self {
            width,
            height,
            samples,
            metadata,
        })
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Open a volume, picking the decoder from the file extension
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn open_volume(path: &Path) -> Result<Volume> {
    let volume = if is_nifti_path(path) {
        debug!("Decoding {} as NIfTI", path.display());
        open_nifti_file(path)?
    } else {
        debug!("Decoding {} as raster image", path.display());
        open_raster_file(path)?
    };

    debug!(
        "Loaded {}x{} samples with {} metadata fields",
        volume.width(),
        volume.height(),
        volume.metadata().len()
    );

    Ok(volume)
}

/// True for `.nii`, `.hdr` and their gzipped variants
#[must_use]
pub fn is_nifti_path(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    let name = name.strip_suffix(".gz").unwrap_or(&name);

    name.ends_with(".nii") || name.ends_with(".hdr")
}
