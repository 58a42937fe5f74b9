// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compares the k-d tree against the linear scan.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use understory_benches::{query_points, query_rects, sorted_points, uniform_points};
use understory_point_index::{LinearIndex, SpatialIndex};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in SIZES {
        let points = uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("kdtree", n), &points, |b, points| {
            b.iter(|| SpatialIndex::from_points(points.iter().copied()).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("linear", n), &points, |b, points| {
            b.iter(|| LinearIndex::from_points(points.iter().copied()).unwrap());
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let rects = query_rects(64, 0.05);
    for n in SIZES {
        let points = uniform_points(n);
        let kd = SpatialIndex::from_points(points.iter().copied()).unwrap();
        let flat = LinearIndex::from_points(points).unwrap();
        group.bench_function(BenchmarkId::new("kdtree", n), |b| {
            b.iter(|| {
                for &r in &rects {
                    black_box(kd.query_rect(r).unwrap().count());
                }
            });
        });
        group.bench_function(BenchmarkId::new("linear", n), |b| {
            b.iter(|| {
                for &r in &rects {
                    black_box(flat.query_rect(r).unwrap().count());
                }
            });
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let queries = query_points(64);
    for n in SIZES {
        let points = uniform_points(n);
        let kd = SpatialIndex::from_points(points.iter().copied()).unwrap();
        let flat = LinearIndex::from_points(points).unwrap();
        group.bench_function(BenchmarkId::new("kdtree", n), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(kd.nearest(q).unwrap());
                }
            });
        });
        group.bench_function(BenchmarkId::new("linear", n), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(flat.nearest(q).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_degenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_input");
    let n = 10_000;
    let kd = SpatialIndex::from_points(sorted_points(n)).unwrap();
    let queries = query_points(64);
    group.bench_function(BenchmarkId::new("kdtree_nearest", n), |b| {
        b.iter(|| {
            for &q in &queries {
                black_box(kd.nearest(q).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_range,
    bench_nearest,
    bench_degenerate
);
criterion_main!(benches);
