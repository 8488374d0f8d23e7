//! Centre slice extraction from the stacked 2D layout

use crate::error::GeometryError;
use crate::types::Dimensions;
use crate::volume::{Metadata, NIFTI_NX, NIFTI_NY, NIFTI_NZ};
use image::{GrayImage, imageops};
use log::debug;

impl Dimensions {
    /// Read `nifti-nx`, `nifti-ny` and `nifti-nz`; every extent must be positive
    pub fn from_metadata(metadata: &Metadata) -> Result<Self, GeometryError> {
        Ok(Self::new(
            extent(metadata, NIFTI_NX)?,
            extent(metadata, NIFTI_NY)?,
            extent(metadata, NIFTI_NZ)?,
        ))
    }
}

fn extent(metadata: &Metadata, field: &'static str) -> Result<u32, GeometryError> {
    let value = metadata
        .get_int(field)
        .ok_or(GeometryError::MissingField(field))?;

    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(GeometryError::InvalidExtent { field, value }),
    }
}

/// Crop the `nx` x `ny` band starting at row `ny * (nz / 2)`
pub fn center_slice(image: &GrayImage, dims: Dimensions) -> Result<GrayImage, GeometryError> {
    let row = dims.center_row();
    debug!("Centre slice of {dims} starts at row {row}");

    let fits = dims.nx <= image.width() && row + u64::from(dims.ny) <= u64::from(image.height());
    if !fits {
        return Err(GeometryError::OutOfBounds {
            row,
            width: dims.nx,
            height: dims.ny,
            image_width: image.width(),
            image_height: image.height(),
        });
    }

    // row + ny <= height, so row fits in u32
    let row = row as u32;
    Ok(imageops::crop_imm(image, 0, row, dims.nx, dims.ny).to_image())
}
