// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spatial frame of a quad-tree: origin, region size and subdivision depth.

use crate::error::QuadTreeError;

/// Width of a coordinate in bits.
pub const COORDINATE_BITS: u32 = u32::BITS;

/// Largest region dimension in bits: half of the coordinate width, so an interleaved
/// index of both coordinates still fits in one word.
pub const MAX_DIM: u32 = COORDINATE_BITS / 2;

/// Largest subdivision depth, bounded by the depth of the underlying tree.
#[allow(
    clippy::cast_possible_truncation,
    reason = "The tree depth limit is a small constant."
)]
pub const MAX_DEPTH: u32 = quadrant_tree::MAX_DEPTH as u32;

/// Region dimension of the default frame (a 1024 × 1024 region).
pub const DEFAULT_DIM: u32 = 10;

/// Subdivision depth of the default frame.
pub const DEFAULT_DEPTH: u32 = 3;

/// Origin, extent and depth of a quad-tree region.
///
/// The region covers `[x0, x0 + 2^dim) × [y0, y0 + 2^dim)` and is subdivided `depth`
/// times. Frames are validated on construction and immutable afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    x0: u32,
    y0: u32,
    dim: u32,
    depth: u32,
}

impl Default for Frame {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Frame {
    /// Origin `(0, 0)`, a 10-bit region and three levels of subdivision.
    pub const DEFAULT: Self = Self {
        x0: 0,
        y0: 0,
        dim: DEFAULT_DIM,
        depth: DEFAULT_DEPTH,
    };

    /// Create a frame with origin `(x0, y0)`, side `2^dim` and `depth` levels.
    ///
    /// Fails with [`QuadTreeError::InvalidParameter`] if `dim > MAX_DIM`,
    /// `depth > MAX_DEPTH`, `depth > dim`, or the region does not fit in `u32`.
    pub fn new(x0: u32, y0: u32, dim: u32, depth: u32) -> Result<Self, QuadTreeError> {
        if dim > MAX_DIM {
            return Err(QuadTreeError::InvalidParameter(
                "region dimension exceeds half of the coordinate width",
            ));
        }
        if depth > MAX_DEPTH {
            return Err(QuadTreeError::InvalidParameter(
                "depth exceeds the maximum depth of the tree",
            ));
        }
        if depth > dim {
            return Err(QuadTreeError::InvalidParameter(
                "depth exceeds the region dimension",
            ));
        }
        let last = (1_u32 << dim) - 1;
        if x0.checked_add(last).is_none() || y0.checked_add(last).is_none() {
            return Err(QuadTreeError::InvalidParameter(
                "region overflows the coordinate space",
            ));
        }
        Ok(Self { x0, y0, dim, depth })
    }

    /// X coordinate of the origin.
    pub const fn x0(&self) -> u32 {
        self.x0
    }

    /// Y coordinate of the origin.
    pub const fn y0(&self) -> u32 {
        self.y0
    }

    /// Largest x coordinate inside the region.
    pub const fn x1(&self) -> u32 {
        self.x0 + (self.side() - 1)
    }

    /// Largest y coordinate inside the region.
    pub const fn y1(&self) -> u32 {
        self.y0 + (self.side() - 1)
    }

    /// Region dimension in bits.
    pub const fn dim(&self) -> u32 {
        self.dim
    }

    /// Number of subdivision levels.
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Side length of the region.
    pub const fn side(&self) -> u32 {
        1 << self.dim
    }

    /// Side length of a deepest-level quadrant.
    pub const fn cell_side(&self) -> u32 {
        1 << self.shift()
    }

    /// Number of coordinate bits below the deepest quadrant.
    pub const fn shift(&self) -> u32 {
        self.dim - self.depth
    }

    /// Number of distinct quadrant indices, `4^depth`.
    pub const fn index_count(&self) -> u32 {
        1 << (2 * self.depth)
    }

    /// Whether `(x, y)` lies inside the region.
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && y >= self.y0 && x <= self.x1() && y <= self.y1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_bounds() {
        let f = Frame::default();
        assert_eq!((f.x0(), f.y0(), f.x1(), f.y1()), (0, 0, 1023, 1023));
        assert_eq!(f.cell_side(), 128);
        assert_eq!(f.index_count(), 64);
    }

    #[test]
    fn custom_frame_bounds() {
        let f = Frame::new(0x10, 0x10, 5, 2).unwrap();
        assert_eq!((f.x1(), f.y1()), (0x2f, 0x2f));
        assert!(f.contains(0x10, 0x2f));
        assert!(!f.contains(0x0f, 0x10));
        assert!(!f.contains(0x30, 0x20));
    }

    #[test]
    fn limits_are_accepted() {
        assert!(Frame::new(0, 0, MAX_DIM, MAX_DEPTH).is_ok());
        assert!(Frame::new(0, 0, 1, 1).is_ok());
        assert!(Frame::new(0, 0, 0, 0).is_ok());
        assert!(Frame::new(u32::MAX - 0xffff, 0, 16, 8).is_ok());
    }

    #[test]
    fn bad_parameters_are_rejected() {
        assert!(matches!(
            Frame::new(0, 0, MAX_DIM + 1, 3),
            Err(QuadTreeError::InvalidParameter(_))
        ));
        assert!(matches!(
            Frame::new(0, 0, 16, MAX_DEPTH + 1),
            Err(QuadTreeError::InvalidParameter(_))
        ));
        assert!(matches!(
            Frame::new(0, 0, 2, 3),
            Err(QuadTreeError::InvalidParameter(_))
        ));
        assert!(matches!(
            Frame::new(u32::MAX, 0, 1, 1),
            Err(QuadTreeError::InvalidParameter(_))
        ));
    }
}
