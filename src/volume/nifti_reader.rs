//! NIfTI decoding through the `nifti` crate

use super::Volume;
use super::metadata::*;
use anyhow::{Context, Result};
use log::debug;
use ndarray::{ArrayD, Axis, Ix3};
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};
use std::path::Path;

/// Open a `.nii` / `.nii.gz` file and lay its first 3D volume out as
/// stacked z slices.
pub fn open_nifti_file(path: &Path) -> Result<Volume> {
    let obj = ReaderOptions::new()
        .read_file(path)
        .with_context(|| format!("Failed to open NIfTI file: {}", path.display()))?;

    let header = obj.header().clone();
    let array: ArrayD<f64> = obj
        .into_volume()
        .into_ndarray::<f64>()
        .context("Failed to decode NIfTI voxel data")?;

    let (nx, ny, nz, samples) = stack_slices(array)?;
    let metadata = header_metadata(&header, nx, ny, nz);

    let width = u32::try_from(nx).context("NIfTI x extent too large")?;
    let height = u32::try_from(ny * nz).context("NIfTI y*z extent too large")?;

    Volume::new(width, height, samples, metadata)
}

/// Reduce to 3 axes and flatten in z, y, x order (x fastest)
fn stack_slices(mut array: ArrayD<f64>) -> Result<(usize, usize, usize, Vec<f64>)> {
    anyhow::ensure!(array.ndim() >= 2, "Expected at least 2D volume, got {}D", array.ndim());

    if array.ndim() > 3 {
        debug!("Keeping first 3D volume of {:?}", array.shape());
    }
    while array.ndim() > 3 {
        array = array.index_axis_move(Axis(3), 0);
    }
    if array.ndim() == 2 {
        array.insert_axis_inplace(Axis(2));
    }

    let array = array
        .into_dimensionality::<Ix3>()
        .context("Failed to reshape NIfTI volume")?;
    let (nx, ny, nz) = array.dim();

    let samples = array.permuted_axes([2, 1, 0]).iter().copied().collect();

    Ok((nx, ny, nz, samples))
}

fn header_metadata(header: &NiftiHeader, nx: usize, ny: usize, nz: usize) -> Metadata {
    let mut metadata = Metadata::new();

    metadata.insert(NIFTI_NDIM, i64::from(header.dim[0]));
    metadata.insert(NIFTI_NX, nx as i64);
    metadata.insert(NIFTI_NY, ny as i64);
    metadata.insert(NIFTI_NZ, nz as i64);
    let nt = if header.dim[0] >= 4 { i64::from(header.dim[4]) } else { 1 };
    metadata.insert(NIFTI_NT, nt.max(1));

    metadata.insert(NIFTI_DX, f64::from(header.pixdim[1]));
    metadata.insert(NIFTI_DY, f64::from(header.pixdim[2]));
    metadata.insert(NIFTI_DZ, f64::from(header.pixdim[3]));

    metadata.insert(NIFTI_DATATYPE, i64::from(header.datatype));
    metadata.insert(NIFTI_SCL_SLOPE, f64::from(header.scl_slope));
    metadata.insert(NIFTI_SCL_INTER, f64::from(header.scl_inter));
    metadata.insert(NIFTI_QFORM_CODE, i64::from(header.qform_code));
    metadata.insert(NIFTI_SFORM_CODE, i64::from(header.sform_code));

    let descrip = String::from_utf8_lossy(&header.descrip);
    let descrip = descrip.trim_end_matches('\0').trim();
    if !descrip.is_empty() {
        metadata.insert(NIFTI_DESCRIP, descrip.to_string());
    }

    metadata
}
