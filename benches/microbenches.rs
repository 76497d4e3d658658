//! Criterion microbenches for the per-detection box queries.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Box construction from raw detector output (BoundingBox::new)
//! - Overlap queries (iou, box_intercept_box)
//! - Line crossing (box_intercept_line)
//! - Resizing (change_size, precise_change_size)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use easy_bbox::{BoundingBox, Segment};

// Raw detections as a detector would emit them: unordered corners, class id last.
const DETECTIONS: [[f64; 5]; 6] = [
    [547.31, 41.473, 940.4, 712.92, 2.0],
    [500.0, 20.0, 700.0, 350.0, 2.0],
    [120.5, 310.2, 40.1, 220.9, 0.0],
    [880.0, 90.0, 1020.7, 260.3, 7.0],
    [300.0, 700.0, 410.0, 640.0, 2.0],
    [12.0, 14.0, 1900.0, 1060.0, 5.0],
];

fn boxes() -> Vec<BoundingBox> {
    DETECTIONS
        .iter()
        .map(|raw| BoundingBox::try_from(*raw).expect("fixture box is valid"))
        .collect()
}

/// Benchmark construction, including normalization and cached derivations.
fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    group.throughput(Throughput::Elements(DETECTIONS.len() as u64));

    group.bench_function("bounding_box_new", |b| {
        b.iter(|| {
            for raw in &DETECTIONS {
                black_box(BoundingBox::new(black_box(raw)).unwrap());
            }
        })
    });

    group.finish();
}

/// Benchmark all-pairs overlap queries.
fn bench_overlap(c: &mut Criterion) {
    let boxes = boxes();
    let mut group = c.benchmark_group("overlap");
    group.throughput(Throughput::Elements((boxes.len() * boxes.len()) as u64));

    group.bench_function("iou", |b| {
        b.iter(|| {
            for a in &boxes {
                for other in &boxes {
                    black_box(a.iou(black_box(other)));
                }
            }
        })
    });

    group.bench_function("box_intercept_box", |b| {
        b.iter(|| {
            for a in &boxes {
                for other in &boxes {
                    black_box(a.box_intercept_box(black_box(other)));
                }
            }
        })
    });

    group.finish();
}

/// Benchmark line crossing against every box.
fn bench_intercept_line(c: &mut Criterion) {
    let boxes = boxes();
    let line = Segment::from_xyxy(0, 300, 1920, 420);
    let mut group = c.benchmark_group("intercept_line");
    group.throughput(Throughput::Elements(boxes.len() as u64));

    group.bench_function("box_intercept_line", |b| {
        b.iter(|| {
            for bbox in &boxes {
                black_box(bbox.box_intercept_line(black_box(&line)));
            }
        })
    });

    group.finish();
}

/// Benchmark resizing, which re-runs normalization on the new corners.
fn bench_resize(c: &mut Criterion) {
    let boxes = boxes();
    let mut group = c.benchmark_group("resize");
    group.throughput(Throughput::Elements(boxes.len() as u64));

    group.bench_function("change_size", |b| {
        b.iter(|| {
            for bbox in &boxes {
                black_box(bbox.change_size(black_box(0.8)).unwrap());
            }
        })
    });

    group.bench_function("precise_change_size", |b| {
        b.iter(|| {
            for bbox in &boxes {
                black_box(
                    bbox.precise_change_size(black_box([1.0, 0.9, 1.0, 0.6]))
                        .unwrap(),
                );
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construct,
    bench_overlap,
    bench_intercept_line,
    bench_resize,
);
criterion_main!(benches);
