// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant Tree: a general tree of named nodes addressed by dotted paths.
//!
//! Every node owns an optional name, optional data, a non-owning reference to its parent,
//! and an ordered [`List`](quadrant_list::List) of child ids.
//! Nodes live in an arena and are addressed by generational [`NodeId`]s, so a removed
//! subtree can never be reached through an old id.
//!
//! - Insert a node as the last child of another ([`Tree::insert_child`]).
//! - Insert data by path, creating parents on demand and merging into existing data
//!   ([`Tree::insert_path`]).
//! - Look nodes up by path ([`Tree::find`]) and render a node's path ([`Tree::path_of`]).
//! - Remove a subtree, handing its data back through a release callback ([`Tree::remove`]).
//! - Flatten a subtree into a pre-order list ([`Tree::flatten`]).
//!
//! Paths are level names joined by `.`, for example `"a.b.c"`. Names are ASCII
//! alphanumeric and at most [`NAME_MAX_LEN`] bytes; a path names at most [`MAX_DEPTH`]
//! levels below the root. The empty path is the root itself.
//!
//! # Example
//!
//! ```rust
//! use quadrant_tree::Tree;
//!
//! let mut tree: Tree<Vec<&str>> = Tree::new();
//! let append = |mut old: Vec<_>, new: Vec<_>| {
//!     old.extend(new);
//!     old
//! };
//!
//! let leaf = tree.insert_path("00.01", vec!["ship"], true, append).unwrap();
//! tree.insert_path("00.01", vec!["rock"], true, append).unwrap();
//! assert_eq!(tree.find("00.01"), Ok(leaf));
//! assert_eq!(tree.data(leaf), Some(&vec!["ship", "rock"]));
//!
//! // Teardown: release every data value, then the empty tree.
//! let mut released = 0;
//! tree.clear_with(|objs| released += objs.len());
//! assert_eq!(released, 2);
//! tree.release();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod path;
pub mod tree;
pub mod types;

pub use error::{PathError, TreeError};
pub use path::{split_path, validate_name};
pub use tree::Tree;
pub use types::{MAX_DEPTH, NAME_MAX_LEN, NodeId, SEPARATOR};
