use super::Volume;
use super::metadata::NIFTI_NX;
use crate::error::ProcessError;

/// Check that the volume came from a NIfTI decoder.
///
/// The `nifti-nx` field must be present and typed as an integer.
pub fn validate_nifti(volume: &Volume) -> Result<(), ProcessError> {
    match volume.metadata().get_int(NIFTI_NX) {
        Some(_) => Ok(()),
        None => Err(ProcessError::NotANiftiFile),
    }
}
