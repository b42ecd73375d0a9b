// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for quad-tree construction, lookup and insertion.

use quadrant_tree::TreeError;
use thiserror::Error;

use crate::codec::QuadIndex;

/// Errors produced by [`QuadTree`](crate::QuadTree) and the quadrant codec.
///
/// Out-of-region points and lookup misses are expected while objects move around
/// and are returned as values. Structural corruption is not represented here: it
/// panics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuadTreeError {
    /// A frame parameter is out of range. Raised only at construction.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The point lies outside the frame's region.
    #[error("point ({x}, {y}) is outside the region")]
    OutOfRegion {
        /// X coordinate of the point.
        x: u32,
        /// Y coordinate of the point.
        y: u32,
    },

    /// No node exists on the requested path.
    #[error("no node at {levels} levels along index {index}")]
    NotFound {
        /// Number of levels walked.
        levels: u32,
        /// The quadrant index that was followed.
        index: QuadIndex,
    },

    /// The request walks more levels than the frame's depth.
    #[error("number of levels {levels} exceeds the depth of the tree ({depth})")]
    TooDeep {
        /// Requested number of levels.
        levels: u32,
        /// Configured depth of the frame.
        depth: u32,
    },

    /// A bounding box is malformed.
    #[error("invalid bounding box: {0}")]
    InvalidBox(&'static str),

    /// The underlying named tree rejected the operation.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
