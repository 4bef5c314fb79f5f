//! Benchmarks for the hues pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hues::types::{Image, SortKey};
use hues::{build_distribution, group_by_hue_buckets, percentile_slices, to_ordered_sequence};

/// A gradient image with many distinct hues and some repeats.
fn gradient(width: usize, height: usize) -> Image {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) % 7 * 36) as u8,
                255,
            ]);
        }
    }
    Image::from_rgba(width, height, &data).unwrap()
}

// -- Histogram benchmarks --

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    let small = gradient(64, 64);
    let large = gradient(512, 512);

    group.bench_function("build_64x64", |b| {
        b.iter(|| build_distribution(black_box(&small)).unwrap())
    });

    group.bench_function("build_512x512", |b| {
        b.iter(|| build_distribution(black_box(&large)).unwrap())
    });

    group.finish();
}

// -- Sorting and grouping benchmarks --

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");

    let map = build_distribution(&gradient(512, 512)).unwrap();

    group.bench_function("sort_by_hue", |b| {
        b.iter(|| to_ordered_sequence(black_box(&map), SortKey::Hue, 0))
    });

    group.bench_function("sort_by_count", |b| {
        b.iter(|| to_ordered_sequence(black_box(&map), SortKey::Count, 0))
    });

    let by_hue = to_ordered_sequence(&map, SortKey::Hue, 0);

    group.bench_function("group_30deg", |b| {
        b.iter(|| group_by_hue_buckets(black_box(&by_hue), 30).unwrap())
    });

    group.bench_function("percentiles_5", |b| {
        b.iter(|| percentile_slices(black_box(&by_hue), 5).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_histogram, bench_sorting);
criterion_main!(benches);
