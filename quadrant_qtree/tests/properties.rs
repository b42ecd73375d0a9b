// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for the quadrant codec and the quad-tree.

use proptest::prelude::*;
use quadrant_qtree::{
    Frame, Options, QuadBox, QuadIndex, QuadTree, QuadTreeError, bit_mask_trailing_ones,
    common_quadrant_depth, node_path, point_index,
};

/// Any valid frame with an origin that leaves room for the region.
fn arbitrary_frame() -> impl Strategy<Value = Frame> {
    (0_u32..=16)
        .prop_flat_map(|dim| (Just(dim), 0..=dim.min(8), 0_u32..0x1_0000, 0_u32..0x1_0000))
        .prop_map(|(dim, depth, x0, y0)| Frame::new(x0, y0, dim, depth).unwrap())
}

/// A frame together with a point inside it.
fn frame_and_point() -> impl Strategy<Value = (Frame, u32, u32)> {
    arbitrary_frame().prop_flat_map(|f| (Just(f), f.x0()..=f.x1(), f.y0()..=f.y1()))
}

/// A frame together with a box inside it.
fn frame_and_box() -> impl Strategy<Value = (Frame, QuadBox)> {
    frame_and_point()
        .prop_flat_map(|(f, x, y)| (Just(f), Just(x), Just(y), x..=f.x1(), y..=f.y1()))
        .prop_map(|(f, x0, y0, x1, y1)| (f, QuadBox::new(x0, y0, x1, y1).unwrap()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Points inside the frame map into `[0, 4^depth)`.
    #[test]
    fn index_in_range((f, x, y) in frame_and_point()) {
        let i = point_index(&f, x, y).unwrap();
        prop_assert!(i.get() < f.index_count());
    }

    /// Points beyond the far edge are outside.
    #[test]
    fn beyond_region_is_outside(f in arbitrary_frame(), dx in 1_u32..1000, y in any::<u32>()) {
        let x = f.x1() + dx;
        prop_assert_eq!(point_index(&f, x, y), Err(QuadTreeError::OutOfRegion { x, y }));
    }

    /// Points before the origin are outside.
    #[test]
    fn before_origin_is_outside(f in arbitrary_frame(), x in any::<u32>()) {
        prop_assume!(f.y0() > 0);
        let y = f.y0() - 1;
        prop_assert!(point_index(&f, x, y).is_err());
    }

    /// The mask of `n` trailing ones has exactly `n` set bits.
    #[test]
    fn trailing_ones_popcount(n in 0_u32..32) {
        prop_assert_eq!(bit_mask_trailing_ones(n).count_ones(), n);
    }

    /// The common depth does not depend on argument order.
    #[test]
    fn common_depth_is_symmetric(f in arbitrary_frame(), a in any::<u32>(), b in any::<u32>()) {
        let (a, b) = (QuadIndex::new(a % f.index_count()), QuadIndex::new(b % f.index_count()));
        prop_assert_eq!(common_quadrant_depth(&f, a, b), common_quadrant_depth(&f, b, a));
        prop_assert_eq!(node_path(&f, a, b), node_path(&f, b, a));
    }

    /// Points in the same deepest cell share every level.
    #[test]
    fn same_cell_shares_all_levels((f, x, y) in frame_and_point()) {
        let mask = !(f.cell_side() - 1);
        let cx = f.x0() + ((x - f.x0()) & mask);
        let cy = f.y0() + ((y - f.y0()) & mask);
        let a = point_index(&f, x, y).unwrap();
        let b = point_index(&f, cx, cy).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(common_quadrant_depth(&f, a, b), f.depth());
    }

    /// Branching twice yields the same node and no new nodes.
    #[test]
    fn branch_is_idempotent((f, x, y) in frame_and_point(), levels_pct in 0.0..=1.0_f64) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "Bounded by depth.")]
        let levels = (f64::from(f.depth()) * levels_pct) as u32;
        let index = point_index(&f, x, y).unwrap();
        let mut q: QuadTree<u32> = QuadTree::with_options(f, Options::STRICT_CONSISTENCY);
        let a = q.branch(levels, index).unwrap();
        let count = q.node_count();
        let b = q.branch(levels, index).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(q.node_count(), count);
        prop_assert_eq!(q.get_node(levels, index), Ok(a));
        prop_assert_eq!(q.level_of(a), Some(levels));
    }

    /// After an insert with parents, the node's bucket ends with the new object.
    #[test]
    fn insert_round_trip((f, x, y) in frame_and_point(), data in prop::collection::vec(any::<u16>(), 1..8)) {
        let index = point_index(&f, x, y).unwrap();
        let mut q = QuadTree::with_frame(f);
        for &d in &data {
            let n = q.insert(f.depth(), index, true, d).unwrap();
            prop_assert_eq!(q.get_node(f.depth(), index), Ok(n));
            prop_assert_eq!(q.bucket(n).and_then(|b| b.back()), Some(&d));
        }
        prop_assert_eq!(q.object_count(), data.len());
    }

    /// Stored boxes lie inside the quadrant of their node and are found by their own query.
    #[test]
    fn box_lands_in_enclosing_quadrant((f, bbox) in frame_and_box()) {
        let mut q = QuadTree::with_options(f, Options::STRICT_CONSISTENCY);
        let n = q.insert_box(&bbox, bbox).unwrap();
        let level = q.level_of(n).unwrap();
        let (levels, index) = q.locate(&bbox).unwrap();
        prop_assert_eq!(level, levels);
        prop_assert_eq!(q.get_node(levels, index), Ok(n));
        // The node's quadrant has side 2^(dim - level) and is aligned to it.
        let side_bits = f.dim() - level;
        prop_assert_eq!((bbox.min_x - f.x0()) >> side_bits, (bbox.max_x - f.x0()) >> side_bits);
        prop_assert_eq!((bbox.min_y - f.y0()) >> side_bits, (bbox.max_y - f.y0()) >> side_bits);
        let hits = q.query_box(&bbox).unwrap();
        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(hits[0], (n, &bbox));
    }

    /// Clearing hands back every inserted object exactly once.
    #[test]
    fn clear_releases_everything(
        f in arbitrary_frame(),
        pts in prop::collection::vec((0.0..1.0_f64, 0.0..1.0_f64), 0..32),
    ) {
        let mut q = QuadTree::with_frame(f);
        for (i, (px, py)) in pts.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "Inside the side.")]
            let (x, y) = (
                f.x0() + (f64::from(f.side()) * px) as u32,
                f.y0() + (f64::from(f.side()) * py) as u32,
            );
            q.insert_box(&QuadBox::point(x, y), i).unwrap();
        }
        prop_assert_eq!(q.iter().count(), pts.len());
        let mut released = Vec::new();
        q.clear_with(|i| released.push(i));
        released.sort_unstable();
        prop_assert_eq!(released, (0..pts.len()).collect::<Vec<_>>());
        q.release();
    }
}
