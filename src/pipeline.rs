//! Loader -> validator -> normalizer -> slicer -> resizer

use crate::cli::Args;
use crate::error::ProcessError;
use crate::intensity;
use crate::output;
use crate::slice;
use crate::types::{Dimensions, IntensityBounds, Size};
use crate::volume::{self, Metadata};
use log::debug;
use std::path::PathBuf;

/// Everything one conversion needs, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub snapshot: PathBuf,
    pub thumbnail: PathBuf,
    pub snapshot_size: Size,
    pub thumbnail_size: Size,
    pub percentile: u8,
}

impl From<&Args> for ConversionJob {
    fn from(args: &Args) -> Self {
        Self {
            input: args.inputfile.clone(),
            snapshot: args.snapshot.clone(),
            thumbnail: args.thumbnail.clone(),
            snapshot_size: args.snapshot_size(),
            thumbnail_size: args.thumbnail_size(),
            percentile: args.percentile,
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub metadata: Metadata,
    pub dimensions: Dimensions,
    pub bounds: IntensityBounds,
    pub snapshot_size: Size,
    pub thumbnail_size: Size,
}

/// Run the whole conversion. Nothing is written unless validation passes.
///
/// # Errors
///
/// Returns [`ProcessError::NotANiftiFile`] when the input lacks NIfTI
/// metadata, and the other variants for load, geometry or write failures.
pub fn convert(job: &ConversionJob) -> Result<ConversionReport, ProcessError> {
    // Stage 1: Load
    let volume = volume::open_volume(&job.input).map_err(ProcessError::LoadFailed)?;

    // Stage 2: Validate
    volume::validate_nifti(&volume)?;

    // Stage 3: Normalize
    let normalized =
        intensity::normalize(&volume, job.percentile).map_err(ProcessError::NormalizationFailed)?;

    // Stage 4: Centre slice
    let dimensions = Dimensions::from_metadata(volume.metadata())?;
    debug!("Volume {dimensions} ({} voxels)", dimensions.voxel_count());
    let slice = slice::center_slice(&normalized.image, dimensions)?;

    // Stage 5: Resize and write, snapshot first
    let snapshot_size = output::write_resized(&slice, job.snapshot_size, &job.snapshot)?;
    let thumbnail_size = output::write_resized(&slice, job.thumbnail_size, &job.thumbnail)?;

    Ok(ConversionReport {
        metadata: volume.metadata().clone(),
        dimensions,
        bounds: normalized.bounds,
        snapshot_size,
        thumbnail_size,
    })
}
