// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named tree and ordered list basics.
//!
//! Insert data by dotted path, merge into existing data, flatten, and remove a subtree.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example named_tree_paths`

use quadrant_list::List;
use quadrant_tree::{Tree, split_path};

fn main() {
    let mut tree: Tree<List<&str>> = Tree::new();
    let merge = |mut old: List<_>, new: List<_>| {
        old.append(&new);
        old
    };

    for (path, item) in [
        ("00", "wall"),
        ("00.01", "ship"),
        ("00.01", "rock"),
        ("11.10.01", "comet"),
    ] {
        let node = tree
            .insert_path(path, List::from_iter([item]), true, merge)
            .unwrap();
        println!("{item} -> {path} ({node:?})");
    }
    println!("split: {:?}", split_path("11.10.01").unwrap());
    println!("bad path: {}", tree.find("00..01").unwrap_err());

    let ship = tree.find("00.01").unwrap();
    let items: Vec<_> = tree.data(ship).unwrap().iter().copied().collect();
    assert_eq!(items, ["ship", "rock"]);

    let root = tree.root().unwrap();
    for id in tree.flatten(root) {
        let path = tree.path_of(id).unwrap_or_default();
        let items: Vec<_> = tree.data(id).map(|l| l.iter().collect()).unwrap_or_default();
        println!("{:<10} {items:?}", if path.is_empty() { "<root>" } else { &path });
    }

    let far = tree.find("11").unwrap();
    tree.remove(far, |mut list| list.clear_with(|item| println!("released {item}")))
        .unwrap();
    assert!(tree.find("11.10.01").is_err());

    tree.clear_with(|mut list| list.clear_with(drop));
    tree.release();
}
