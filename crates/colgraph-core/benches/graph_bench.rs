//! # Graph Benchmarks
//!
//! Performance benchmarks for colgraph-core graph operations.
//!
//! Run with: `cargo bench -p colgraph-core`

use colgraph_core::{GraphConfig, GraphDb, Schema, VertexIndex};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

struct BenchSchema;

impl Schema for BenchSchema {
    type VertexId = u64;
    type VertexProps = (i64, u32);
    type EdgeId = u64;
    type EdgeProps = (i64,);
}

type Db = GraphDb<BenchSchema>;

/// Create a graph with N vertices and edges between consecutive vertices.
fn create_linear_graph(size: usize) -> Db {
    let mut db = Db::new();
    let mut prev = None;

    for i in 0..size {
        let v = db.add_vertex_with(i as u64, (i as i64, 0));
        if let Some(p) = prev {
            db.add_edge_with(i as u64, p, v, (10,)).expect("edge");
        }
        prev = Some(v);
    }

    db
}

/// Create a graph with N vertices and edges in a star pattern (hub-and-spoke).
fn create_star_graph(size: usize) -> Db {
    let mut db = Db::new();
    let hub = db.add_vertex(0u64);

    for i in 1..size {
        let spoke = db.add_vertex(i as u64);
        db.add_edge(i as u64, hub, spoke).expect("edge");
    }

    db
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_vertex_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_insertion");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("default", size), size, |b, &size| {
            b.iter(|| {
                let mut db = Db::new();
                for i in 0..size {
                    db.add_vertex(i as u64);
                }
                black_box(db)
            });
        });

        group.bench_with_input(BenchmarkId::new("reserved", size), size, |b, &size| {
            b.iter(|| {
                let mut db = Db::with_config(&GraphConfig::new(size, 0));
                for i in 0..size {
                    db.add_vertex(i as u64);
                }
                black_box(db)
            });
        });
    }

    group.finish();
}

fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(create_linear_graph(size)));
        });
    }

    group.finish();
}

fn bench_column_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_scan");

    for size in [1000, 10000].iter() {
        let db = create_linear_graph(*size);

        group.bench_with_input(BenchmarkId::new("column", size), size, |b, _| {
            b.iter(|| black_box(db.vertex_column::<0>().iter().sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("handles", size), size, |b, _| {
            b.iter(|| {
                black_box(
                    db.get_vertices()
                        .iter()
                        .map(|v| *v.property::<0>())
                        .sum::<i64>(),
                )
            });
        });
    }

    group.finish();
}

fn bench_edge_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_iteration");

    for size in [1000, 10000].iter() {
        let db = create_linear_graph(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(
                    db.get_edges()
                        .iter()
                        .map(|e| e.dst().index().get())
                        .sum::<usize>(),
                )
            });
        });
    }

    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    for size in [100, 1000, 10000].iter() {
        let db = create_star_graph(*size);
        let hub = db.vertex(VertexIndex(0)).expect("hub should exist");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(hub.neighbors().iter().count()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_vertex_insertion,
    bench_edge_insertion,
    bench_column_scan,
    bench_edge_iteration,
    bench_neighbors,
);

criterion_main!(benches);
