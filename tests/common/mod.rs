#![allow(dead_code)]

use std::path::Path;

const HEADER_SIZE: usize = 348;
const VOX_OFFSET: usize = 352;
const DT_FLOAT32: i16 = 16;

/// Write a single-file little-endian NIfTI-1 volume of `f32` samples.
///
/// `data` is in file order: x fastest, then y, then z.
pub fn write_nifti(path: &Path, dims: &[u16], data: &[f32]) {
    assert!(!dims.is_empty() && dims.len() <= 7);
    let count: usize = dims.iter().map(|&d| usize::from(d)).product();
    assert_eq!(count, data.len());

    let mut header = [0u8; HEADER_SIZE];
    put(&mut header, 0, &(HEADER_SIZE as i32).to_le_bytes());

    let mut dim = [1i16; 8];
    dim[0] = dims.len() as i16;
    for (slot, &d) in dim[1..].iter_mut().zip(dims) {
        *slot = d as i16;
    }
    for (i, d) in dim.iter().enumerate() {
        put(&mut header, 40 + 2 * i, &d.to_le_bytes());
    }

    put(&mut header, 70, &DT_FLOAT32.to_le_bytes());
    put(&mut header, 72, &32i16.to_le_bytes());
    for i in 0..8 {
        put(&mut header, 76 + 4 * i, &1.0f32.to_le_bytes());
    }
    put(&mut header, 108, &(VOX_OFFSET as f32).to_le_bytes());
    put(&mut header, 112, &1.0f32.to_le_bytes());
    put(&mut header, 116, &0.0f32.to_le_bytes());
    put(&mut header, 148, b"synthetic test volume");
    put(&mut header, 344, b"n+1\0");

    let mut bytes = Vec::with_capacity(VOX_OFFSET + 4 * data.len());
    bytes.extend_from_slice(&header);
    // No extensions
    bytes.extend_from_slice(&[0u8; 4]);
    for value in data {
        bytes.extend_from_slice(&value.to_le_bytes());
    }

    std::fs::write(path, bytes).unwrap();
}

/// `nz` slices of `nx` x `ny` voxels, slice `z` filled with `values[z]`
pub fn write_constant_slices(path: &Path, nx: u16, ny: u16, values: &[f32]) {
    let per_slice = usize::from(nx) * usize::from(ny);
    let data: Vec<f32> = values
        .iter()
        .flat_map(|&v| std::iter::repeat_n(v, per_slice))
        .collect();
    write_nifti(path, &[nx, ny, values.len() as u16], &data);
}

fn put(header: &mut [u8], offset: usize, bytes: &[u8]) {
    header[offset..offset + bytes.len()].copy_from_slice(bytes);
}
