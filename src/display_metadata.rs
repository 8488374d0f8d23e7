use crate::pipeline::ConversionReport;
use crate::volume::{
    Metadata, NIFTI_DATATYPE, NIFTI_DESCRIP, NIFTI_DX, NIFTI_DY, NIFTI_DZ, NIFTI_NT,
};

pub fn print_report(report: &ConversionReport) {
    print_metadata(&report.metadata);

    println!("{:20}: {}", "Dimensions", report.dimensions);
    println!("{:20}: {}", "Intensity Bounds", report.bounds);
    println!("{:20}: {}", "Snapshot", report.snapshot_size);
    println!("{:20}: {}", "Thumbnail", report.thumbnail_size);
    println!();
}

pub fn print_metadata(metadata: &Metadata) {
    print_field("Description", metadata, NIFTI_DESCRIP);
    print_field("Datatype", metadata, NIFTI_DATATYPE);
    print_field("Time Points", metadata, NIFTI_NT);
    print_voxel_size(metadata);
}

fn print_field(name: &str, metadata: &Metadata, key: &str) {
    if let Some(v) = metadata.get(key) {
        println!("{name:20}: {v}");
    }
}

fn print_voxel_size(metadata: &Metadata) {
    if let (Some(dx), Some(dy), Some(dz)) = (
        metadata.get(NIFTI_DX),
        metadata.get(NIFTI_DY),
        metadata.get(NIFTI_DZ),
    ) {
        println!("{:20}: {dx}x{dy}x{dz}", "Voxel Size");
    }
}
