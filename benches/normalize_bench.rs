use criterion::{Criterion, criterion_group, criterion_main};
use nithumb::intensity;
use nithumb::output;
use nithumb::slice;
use nithumb::types::{Dimensions, Size};
use nithumb::volume::{Metadata, NIFTI_NX, NIFTI_NY, NIFTI_NZ, Volume};
use std::hint::black_box;

const NX: u32 = 256;
const NY: u32 = 256;
const NZ: u32 = 64;

/// Smooth synthetic 256x256x64 volume with a wide intensity range
fn synthetic_volume() -> Volume {
    let samples = (0..NX * NY * NZ)
        .map(|i| {
            let x = f64::from(i % NX);
            let y = f64::from((i / NX) % NY);
            let z = f64::from(i / (NX * NY));
            (x * 0.05).sin() * 800.0 + (y * 0.03).cos() * 400.0 + z * 10.0
        })
        .collect();

    let mut metadata = Metadata::new();
    metadata.insert(NIFTI_NX, i64::from(NX));
    metadata.insert(NIFTI_NY, i64::from(NY));
    metadata.insert(NIFTI_NZ, i64::from(NZ));

    Volume::new(NX, NY * NZ, samples, metadata).unwrap()
}

// ============================================================================
// TIER 1: NORMALIZATION (Primary Baseline)
// ============================================================================

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let volume = synthetic_volume();

    group.bench_function("rescale_and_stretch_p0", |b| {
        b.iter(|| intensity::normalize(black_box(&volume), black_box(0)).unwrap());
    });

    group.bench_function("rescale_and_stretch_p5", |b| {
        b.iter(|| intensity::normalize(black_box(&volume), black_box(5)).unwrap());
    });

    group.finish();
}

// ============================================================================
// TIER 2: COMPONENT-LEVEL BENCHMARKS (Diagnostic)
// ============================================================================

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    let rescaled = intensity::rescale_to_u8(&synthetic_volume()).unwrap();

    group.bench_function("cumulative_bounds", |b| {
        b.iter(|| {
            intensity::Histogram::from_image(black_box(&rescaled))
                .cumulative()
                .percentile_bounds(5)
        });
    });

    group.finish();
}

fn bench_slice_and_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_and_resize");
    let normalized = intensity::normalize(&synthetic_volume(), 0).unwrap();
    let dims = Dimensions::new(NX, NY, NZ);

    group.bench_function("center_slice", |b| {
        b.iter(|| slice::center_slice(black_box(&normalized.image), black_box(dims)).unwrap());
    });

    let centre = slice::center_slice(&normalized.image, dims).unwrap();
    group.bench_function("snapshot_128", |b| {
        b.iter(|| output::resize(black_box(&centre), Size::new(128, 128)));
    });

    group.finish();
}

// ============================================================================
// BENCHMARK REGISTRATION
// ============================================================================

criterion_group!(
    benches,
    bench_normalize,
    bench_histogram,
    bench_slice_and_resize,
);

criterion_main!(benches);
