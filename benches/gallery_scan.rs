// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery folder scanning.
//!
//! Measures how long it takes to scan a folder and build the sorted image
//! list that backs the thumbnail grid.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::gallery::ImageList;
use std::fs;
use std::hint::black_box;

/// Populate a temporary folder with `count` stub image files plus some noise.
fn populate(dir: &std::path::Path, count: usize) {
    for i in 0..count {
        fs::write(dir.join(format!("image_{i:04}.png")), b"stub").unwrap();
    }
    for i in 0..count / 4 {
        fs::write(dir.join(format!("notes_{i:04}.txt")), b"stub").unwrap();
    }
}

fn bench_scan_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_scan");

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    populate(dir.path(), 200);

    group.bench_function("scan_directory_200_images", |b| {
        b.iter(|| {
            let list = ImageList::scan_directory(dir.path()).unwrap();
            black_box(&list);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan_directory);
criterion_main!(benches);
