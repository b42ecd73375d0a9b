// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant Quad-Tree: a region quad-tree that buckets 2D boxes by quadrant.
//!
//! ## Overview
//!
//! A [`QuadTree`] covers a square region of `2^dim` pixels per side, described by a
//! [`Frame`], and subdivides it up to `depth` times. An object is stored at the deepest
//! quadrant that contains both corners of its bounding box, so objects that straddle a
//! quadrant boundary stay higher up the tree. Each node holds a [`Bucket`] of objects in
//! insertion order.
//!
//! Points are addressed by [`QuadIndex`]: the bits of the point's frame-relative x and y
//! coordinates interleaved pairwise, x first (see [`codec`]). Following an index down a
//! number of levels names one node; [`QuadTree::get_node`] looks it up and
//! [`QuadTree::branch`] creates it, subdividing each node on the way into all four of its
//! children at once.
//!
//! ## Errors
//!
//! Expected failures are returned as [`QuadTreeError`]: points outside the region, lookups
//! of nodes that don't exist yet, and requests deeper than the frame. Frames are validated
//! once, at construction. Structural corruption and releasing a non-empty tree are
//! programming errors and panic.
//!
//! ## Options
//!
//! [`Options::VERBOSE`] emits `log` records for subdivision, inserts and teardown.
//! [`Options::STRICT_CONSISTENCY`] checks the whole structure after every mutation.
//!
//! ## Example
//!
//! ```rust
//! use quadrant_qtree::{QuadBox, QuadTree};
//!
//! // The default frame: a 1024 × 1024 region, three levels deep.
//! let mut q = QuadTree::new();
//! let ship = q.insert_box(&QuadBox::new(0, 0, 10, 10).unwrap(), "ship").unwrap();
//! let rock = q.insert_box(&QuadBox::new(20, 30, 40, 50).unwrap(), "rock").unwrap();
//! let comet = q.insert_box(&QuadBox::new(500, 500, 600, 600).unwrap(), "comet").unwrap();
//!
//! assert_eq!(ship, rock);
//! assert_eq!(q.path_of(ship).as_deref(), Some("00.00.00"));
//! assert_eq!(q.root(), Some(comet), "boxes across the center stay at the root");
//!
//! let near: Vec<_> = q
//!     .query_box(&QuadBox::point(5, 5))
//!     .unwrap()
//!     .into_iter()
//!     .map(|(_, name)| *name)
//!     .collect();
//! assert_eq!(near, ["comet", "ship", "rock"]);
//!
//! // Teardown: hand every object back, then release the empty tree.
//! let mut released = 0;
//! q.clear_with(|_| released += 1);
//! assert_eq!(released, 3);
//! q.release();
//! ```
//!
//! ## Features
//!
//! - `kurbo_adapter`: build a [`QuadBox`] from a `kurbo::Rect` and back.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod codec;
pub mod error;
pub mod frame;
pub mod path;
pub mod qtree;
pub mod types;

pub use codec::{
    QuadIndex, bit_mask_range, bit_mask_trailing_ones, common_quadrant_depth, point_index,
    quadrant_at,
};
pub use error::QuadTreeError;
pub use frame::{DEFAULT_DEPTH, DEFAULT_DIM, Frame, MAX_DEPTH, MAX_DIM};
pub use path::{QUADRANT_NAMES, index_path, node_path};
pub use qtree::{Bucket, QuadTree};
pub use types::{Options, QuadBox};

pub use quadrant_tree::NodeId;
