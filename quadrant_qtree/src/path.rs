// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotted-path rendering of quadrant indices.
//!
//! Quad-tree nodes are addressed by index; these paths exist for lookup through the
//! named tree and for debugging. A path lists one child name per level, top first,
//! for example `"10.01.00"`.

use alloc::string::String;

use quadrant_tree::SEPARATOR;

use crate::codec::{QuadIndex, common_quadrant_depth, quadrant_at};
use crate::error::QuadTreeError;
use crate::frame::Frame;

/// Child names in child order, indexed by the 2-bit quadrant selector (x bit first).
pub const QUADRANT_NAMES: [&str; 4] = ["00", "01", "10", "11"];

/// Path of the deepest quadrant that contains both `a` and `b`.
///
/// The root yields the empty string.
pub fn node_path(frame: &Frame, a: QuadIndex, b: QuadIndex) -> String {
    let levels = common_quadrant_depth(frame, a, b);
    render(frame, levels, a)
}

/// Path of the quadrant `index` selects after `levels` subdivisions.
pub fn index_path(frame: &Frame, levels: u32, index: QuadIndex) -> Result<String, QuadTreeError> {
    if levels > frame.depth() {
        return Err(QuadTreeError::TooDeep {
            levels,
            depth: frame.depth(),
        });
    }
    Ok(render(frame, levels, index))
}

fn render(frame: &Frame, levels: u32, index: QuadIndex) -> String {
    let mut path = String::with_capacity(3 * levels as usize);
    for level in 0..levels {
        if level > 0 {
            path.push(SEPARATOR);
        }
        path.push_str(QUADRANT_NAMES[usize::from(quadrant_at(frame, index, level))]);
    }
    path
}
