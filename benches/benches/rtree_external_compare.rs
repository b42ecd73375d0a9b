// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant_qtree::{Frame, QuadBox, QuadTree};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_boxes(n: u32, cell: u32) -> Vec<QuadBox> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(QuadBox::from_xywh(x * cell, y * cell, cell, cell).unwrap());
        }
    }
    out
}

fn to_rstar_rects(v: &[QuadBox]) -> Vec<Rectangle<[i64; 2]>> {
    v.iter()
        .map(|b| {
            Rectangle::from_corners(
                [i64::from(b.min_x), i64::from(b.min_y)],
                [i64::from(b.max_x), i64::from(b.max_y)],
            )
        })
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    let frame = Frame::new(0, 0, 12, 6).unwrap();
    for &n in &[64_u32, 128] {
        let boxes = gen_grid_boxes(n, frame.side() / n);
        let query = QuadBox::from_xywh(100, 100, 400, 400).unwrap();
        group.throughput(Throughput::Elements(u64::from(n * n)));

        group.bench_function(format!("quadrant_build_query_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::<u32>::with_frame(frame),
                |mut q| {
                    for (i, bx) in boxes.iter().enumerate() {
                        let _ = q.insert_box(bx, i as u32);
                    }
                    // Broad phase: candidates, then the exact overlap test.
                    let candidates = q.query_box(&query).unwrap_or_default();
                    let hits = candidates
                        .iter()
                        .filter(|(_, i)| boxes[**i as usize].intersects(&query))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_rects(&boxes),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [i64::from(query.min_x), i64::from(query.min_y)],
                        [i64::from(query.max_x), i64::from(query.max_y)],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
