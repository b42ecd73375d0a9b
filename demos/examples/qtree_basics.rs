// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quad-tree basics.
//!
//! Compute quadrant indices, insert boxes, look nodes up by index and by path,
//! then tear the tree down.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example qtree_basics`

use quadrant_qtree::{QuadBox, QuadTree, node_path};

fn main() {
    // A 32 × 32 region at (16, 16), subdivided twice.
    let mut q = QuadTree::init(0x10, 0x10, 5, 2).unwrap();
    let frame = *q.frame();
    for (x, y) in [(0x10, 0x10), (0x20, 0x20), (0x30, 0x20)] {
        match q.point_index(x, y) {
            Ok(i) => println!("({x:#x}, {y:#x}) -> index {i}"),
            Err(e) => println!("({x:#x}, {y:#x}) -> {e}"),
        }
    }

    // The deepest quadrant holding both corners is where a box lands.
    let boxes = [
        ("ship", QuadBox::new(0x11, 0x11, 0x14, 0x14).unwrap()),
        ("rock", QuadBox::new(0x12, 0x15, 0x16, 0x17).unwrap()),
        ("wall", QuadBox::new(0x16, 0x10, 0x1a, 0x12).unwrap()),
    ];
    for (name, bbox) in &boxes {
        let a = q.point_index(bbox.min_x, bbox.min_y).unwrap();
        let b = q.point_index(bbox.max_x, bbox.max_y).unwrap();
        let node = q.insert_box(bbox, *name).unwrap();
        println!(
            "{name}: corners {a} / {b}, path {:?}, node {:?}",
            node_path(&frame, a, b),
            node
        );
    }

    let ship = q.find_path("00.00").unwrap();
    let bucket: Vec<_> = q.bucket(ship).unwrap().iter().copied().collect();
    println!("bucket at 00.00: {bucket:?}");
    assert_eq!(bucket, ["ship", "rock"]);

    let wall = q.find_path("00").unwrap();
    assert_eq!(q.get_node(1, q.point_index(0x10, 0x10).unwrap()), Ok(wall));

    // Objects whose quadrant may overlap the query box.
    let candidates: Vec<_> = q
        .query_box(&QuadBox::point(0x13, 0x13))
        .unwrap()
        .into_iter()
        .map(|(_, name)| *name)
        .collect();
    println!("candidates near (0x13, 0x13): {candidates:?}");

    let mut released = Vec::new();
    q.clear_with(|name| released.push(name));
    println!("released: {released:?}");
    q.release();
}
