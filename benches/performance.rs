// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Shelfscan Team

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Point3;
use shelfscan::geometry::{Face, FaceAdjacency, Mesh, SectionFilter};
use shelfscan::ShelfAnalyzer;

/// Shelf-like mesh: `levels` stacked grids of `cells` x `cells` quads
fn stacked_grids(levels: usize, cells: usize) -> Mesh {
    let mut mesh = Mesh::new();
    for level in 0..levels {
        let y = level as f64 * 0.4;
        let base = mesh.vertex_count();
        for cz in 0..=cells {
            for cx in 0..=cells {
                mesh.add_vertex(Point3::new(cx as f64 * 0.1, y, cz as f64 * 0.1));
            }
        }
        let stride = cells + 1;
        for cz in 0..cells {
            for cx in 0..cells {
                let a = base + cz * stride + cx;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                mesh.add_face(Face::new([a, c, b]));
                mesh.add_face(Face::new([b, c, d]));
            }
        }
    }
    mesh
}

fn bench_adjacency(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency");

    for cells in [4, 8, 16] {
        let mesh = stacked_grids(6, cells);
        group.bench_with_input(
            BenchmarkId::new("build", mesh.face_count()),
            &mesh,
            |b, mesh| {
                b.iter(|| FaceAdjacency::build(black_box(mesh)));
            },
        );
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = ShelfAnalyzer::with_filter(SectionFilter::default());

    for cells in [4, 8, 16] {
        let mesh = stacked_grids(6, cells);
        group.bench_with_input(
            BenchmarkId::new("full_pipeline", mesh.face_count()),
            &mesh,
            |b, mesh| {
                b.iter(|| analyzer.analyze(black_box(mesh)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_adjacency, bench_analyze);
criterion_main!(benches);
