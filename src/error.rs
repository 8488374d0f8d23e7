use std::path::PathBuf;
use thiserror::Error;

/// Error type for a single conversion run
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Input decoded, but it carries no NIfTI metadata
    #[error("not a nifti file")]
    NotANiftiFile,

    /// Input could not be opened or decoded
    #[error("{0:#}")]
    LoadFailed(anyhow::Error),

    /// Normalization of the decoded samples failed
    #[error("{0:#}")]
    NormalizationFailed(anyhow::Error),

    /// Slice region could not be derived from the volume
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Resized image could not be written
    #[error("Failed to write {}: {source}", path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ProcessError {
    /// Process exit status for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            ProcessError::NotANiftiFile => 1,
            _ => 2,
        }
    }
}

/// Slice extraction failures; always fatal
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Missing or invalid {0} metadata field")]
    MissingField(&'static str),

    #[error("Invalid volume extent {field}={value}")]
    InvalidExtent { field: &'static str, value: i64 },

    #[error(
        "Slice region {width}x{height} at row {row} exceeds {image_width}x{image_height} image"
    )]
    OutOfBounds {
        row: u64,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}
