//! Metadata Benchmarks
//!
//! Encoding descriptions, ICC synthesis, EXIF decoding and container capture.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jxlmeta_core::{
    CapturePolicy, ColorEncoding, MetadataBoxStore, TiffExifData, TransferFunction, describe,
    icc::try_to_icc,
};

fn encodings() -> Vec<(&'static str, ColorEncoding)> {
    let srgb = ColorEncoding::srgb(false);
    let pq = srgb
        .with_transfer_function(TransferFunction::Pq)
        .unwrap_or(srgb);
    vec![
        ("srgb", srgb),
        ("linear_gray", ColorEncoding::linear_srgb(true)),
        ("pq", pq),
    ]
}

/// Little-endian EXIF with an orientation and a make string
fn sample_exif() -> Vec<u8> {
    let mut tiff = vec![b'I', b'I', 0x2A, 0x00, 8, 0, 0, 0];
    tiff.extend_from_slice(&2u16.to_le_bytes());
    // Orientation: SHORT, inline
    tiff.extend_from_slice(&0x0112u16.to_le_bytes());
    tiff.extend_from_slice(&3u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&[6, 0, 0, 0]);
    // Make: ASCII at offset 38
    tiff.extend_from_slice(&0x010Fu16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&38u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(b"Camera\0\0");

    let mut out = vec![0, 0, 0, 0];
    out.extend(tiff);
    out
}

fn sample_container(exif_boxes: usize) -> Vec<u8> {
    let exif = sample_exif();
    let mut out = jxlmeta_core::metadata::JXL_SIGNATURE.to_vec();
    for _ in 0..exif_boxes {
        out.extend_from_slice(&((exif.len() + 8) as u32).to_be_bytes());
        out.extend_from_slice(b"Exif");
        out.extend_from_slice(&exif);
    }
    out
}

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    for (name, encoding) in encodings() {
        group.bench_function(name, |b| b.iter(|| describe(black_box(&encoding))));
    }

    group.finish();
}

fn bench_icc(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_to_icc");

    for (name, encoding) in encodings() {
        group.bench_function(name, |b| b.iter(|| try_to_icc(black_box(&encoding))));
    }

    group.finish();
}

fn bench_exif(c: &mut Criterion) {
    let exif = sample_exif();

    c.bench_function("exif_parse", |b| {
        b.iter(|| TiffExifData::parse(black_box(&exif)))
    });
}

fn bench_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture_container");
    let policy = CapturePolicy::default();

    for count in [1, 16, 256].iter() {
        let container = sample_container(*count);
        group.throughput(Throughput::Bytes(container.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &container, |b, data| {
            b.iter(|| MetadataBoxStore::capture_container(black_box(&policy), black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_describe, bench_icc, bench_exif, bench_capture);
criterion_main!(benches);
