// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Game objects in a quad-tree.
//!
//! Objects carry floating-point bounds, are bucketed through the Kurbo adapter, move each
//! frame, and are re-bucketed when their quadrant changes. A broad phase over the tree
//! yields candidate pairs that are then tested exactly.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example qtree_game_objects`

use kurbo::{Rect, Vec2};
use log::{Level, LevelFilter, Log, Metadata, Record};
use quadrant_qtree::{Frame, NodeId, Options, QuadBox, QuadTree};

struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            println!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

#[derive(Debug)]
struct Object {
    name: &'static str,
    bounds: Rect,
    velocity: Vec2,
}

fn main() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let frame = Frame::new(0, 0, 10, 3).unwrap();
    let mut q = QuadTree::with_options(frame, Options::VERBOSE | Options::STRICT_CONSISTENCY);
    let mut objects = vec![
        Object {
            name: "ship",
            bounds: Rect::new(100.0, 100.0, 120.0, 116.0),
            velocity: Vec2::new(30.0, 12.0),
        },
        Object {
            name: "asteroid",
            bounds: Rect::new(170.0, 120.0, 210.0, 160.0),
            velocity: Vec2::new(-5.0, 0.0),
        },
        Object {
            name: "comet",
            bounds: Rect::new(700.0, 40.0, 712.5, 52.5),
            velocity: Vec2::new(-40.0, 25.0),
        },
    ];

    // Each object remembers the node holding its index.
    let mut homes: Vec<NodeId> = objects
        .iter()
        .enumerate()
        .map(|(i, o)| q.insert_box(&QuadBox::from_rect(o.bounds).unwrap(), i).unwrap())
        .collect();

    for step in 0..4 {
        for (i, o) in objects.iter_mut().enumerate() {
            o.bounds = o.bounds + o.velocity;
            let bbox = QuadBox::from_rect(o.bounds).unwrap();
            let (levels, index) = q.locate(&bbox).unwrap();
            if q.get_node(levels, index) != Ok(homes[i]) {
                q.remove_object(homes[i], &i);
                homes[i] = q.insert_box(&bbox, i).unwrap();
                println!("step {step}: {} moved to {:?}", o.name, q.path_of(homes[i]));
            }
        }

        // Broad phase per object, then the exact overlap test.
        for (i, o) in objects.iter().enumerate() {
            let bbox = QuadBox::from_rect(o.bounds).unwrap();
            for (_, &j) in q.query_box(&bbox).unwrap() {
                if j > i && !o.bounds.intersect(objects[j].bounds).is_zero_area() {
                    println!("step {step}: {} hits {}", o.name, objects[j].name);
                }
            }
        }
    }

    println!("{} objects in {} nodes", q.object_count(), q.node_count());
    q.clear_with(drop);
    q.release();
}
