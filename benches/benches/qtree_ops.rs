// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant_qtree::{Frame, QuadBox, QuadTree, point_index};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u32) -> u32 {
        (self.next_u64() % u64::from(n)) as u32
    }
}

fn gen_points(count: usize, side: u32) -> Vec<(u32, u32)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| (rng.below(side), rng.below(side)))
        .collect()
}

fn gen_grid_boxes(n: u32, cell: u32) -> Vec<QuadBox> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(QuadBox::from_xywh(x * cell, y * cell, cell, cell).unwrap());
        }
    }
    out
}

fn gen_random_boxes(count: usize, side: u32, max_size: u32) -> Vec<QuadBox> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let w = 1 + rng.below(max_size);
            let h = 1 + rng.below(max_size);
            let x = rng.below(side - w);
            let y = rng.below(side - h);
            QuadBox::from_xywh(x, y, w, h).unwrap()
        })
        .collect()
}

fn build(frame: Frame, boxes: &[QuadBox]) -> QuadTree<u32> {
    let mut q = QuadTree::with_frame(frame);
    for (i, b) in boxes.iter().enumerate() {
        let _ = q.insert_box(b, i as u32);
    }
    q
}

fn bench_point_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_index");
    for (dim, depth) in [(10, 3), (16, 8)] {
        let frame = Frame::new(0, 0, dim, depth).unwrap();
        let points = gen_points(4096, frame.side());
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("dim{dim}_depth{depth}"), |b| {
            b.iter(|| {
                let mut acc = 0_u32;
                for &(x, y) in &points {
                    acc ^= point_index(&frame, x, y).map_or(0, |i| i.get());
                }
                black_box(acc);
            });
        });
    }
    group.finish();
}

fn bench_insert_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_box");
    let frame = Frame::new(0, 0, 12, 6).unwrap();
    for &n in &[32_u32, 64, 128] {
        let boxes = gen_grid_boxes(n, frame.side() / n);
        group.throughput(Throughput::Elements(u64::from(n * n)));
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::<u32>::with_frame(frame),
                |mut q| {
                    for (i, bx) in boxes.iter().enumerate() {
                        let _ = q.insert_box(bx, i as u32);
                    }
                    black_box(q.node_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let boxes = gen_random_boxes(4096, frame.side(), 48);
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("random_4096", |b| {
        b.iter_batched(
            || QuadTree::<u32>::with_frame(frame),
            |mut q| {
                for (i, bx) in boxes.iter().enumerate() {
                    let _ = q.insert_box(bx, i as u32);
                }
                black_box(q.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_box");
    let frame = Frame::new(0, 0, 12, 6).unwrap();
    let q = build(frame, &gen_random_boxes(4096, frame.side(), 48));
    let queries = gen_random_boxes(256, frame.side(), 64);
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("random_4096_small_queries", |b| {
        b.iter(|| {
            let mut hits = 0;
            for query in &queries {
                hits += q.query_box(query).map_or(0, |v| v.len());
            }
            black_box(hits);
        });
    });
    let wide = QuadBox::from_xywh(0, 0, frame.side() / 2, frame.side() / 2).unwrap();
    group.bench_function("random_4096_quarter_query", |b| {
        b.iter(|| black_box(q.query_box(&wide).map_or(0, |v| v.len())));
    });
    group.finish();
}

criterion_group!(benches, bench_point_index, bench_insert_box, bench_query_box);
criterion_main!(benches);
