// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant index codec: points to interleaved quadrant indices and back to levels.
//!
//! A point is first shifted into frame space and divided by the deepest quadrant's
//! side. Bit `i` of the shifted x and y coordinates is then packed into bit pair `i`
//! of the index, x in the more significant position:
//!
//! ```text
//! MSB                                                          bit 0
//!   | 0 ... 0 | x.d-1 y.d-1 | ... | x.1 y.1 | x.0 y.0 |
//!              \ level 0  /                \ level d-1 /
//! ```
//!
//! The most significant pair selects the child at level 0 (directly below the root),
//! the least significant pair the child at the deepest level. For example, with
//! shifted coordinates `x = 0b10` and `y = 0b11` the index is `0b1101`.

use core::fmt;

use crate::error::QuadTreeError;
use crate::frame::Frame;

/// Interleaved quadrant index of a point, `2 * depth` bits wide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuadIndex(u32);

impl QuadIndex {
    /// Wrap a raw index.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for QuadIndex {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<QuadIndex> for u32 {
    fn from(index: QuadIndex) -> Self {
        index.0
    }
}

impl fmt::Display for QuadIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Mask with the lowest `n` bits set; all ones when `n` is at least the word width.
///
/// ```
/// use quadrant_qtree::codec::bit_mask_trailing_ones;
///
/// assert_eq!(bit_mask_trailing_ones(0), 0);
/// assert_eq!(bit_mask_trailing_ones(5), 0b1_1111);
/// ```
pub const fn bit_mask_trailing_ones(n: u32) -> u32 {
    if n >= u32::BITS {
        u32::MAX
    } else {
        (1 << n) - 1
    }
}

/// Mask with bits `low..high` set (0-based, `high` exclusive); zero if `low >= high`.
///
/// Counting bits from one, this is the range `(low, high]`, which is how one
/// quadrant pair is cut out of a packed index.
///
/// ```
/// use quadrant_qtree::codec::bit_mask_range;
///
/// assert_eq!(bit_mask_range(2, 5), 0b1_1100);
/// assert_eq!(bit_mask_range(1, 1), 0);
/// ```
pub const fn bit_mask_range(low: u32, high: u32) -> u32 {
    if low >= high {
        0
    } else {
        bit_mask_trailing_ones(high) & !bit_mask_trailing_ones(low)
    }
}

/// Quadrant index of the point `(x, y)` in `frame`.
///
/// Points outside the region yield [`QuadTreeError::OutOfRegion`].
pub fn point_index(frame: &Frame, x: u32, y: u32) -> Result<QuadIndex, QuadTreeError> {
    if !frame.contains(x, y) {
        return Err(QuadTreeError::OutOfRegion { x, y });
    }
    let xs = (x - frame.x0()) >> frame.shift();
    let ys = (y - frame.y0()) >> frame.shift();
    let mut index = 0;
    for i in 0..frame.depth() {
        index |= ((xs >> i) & 1) << (2 * i + 1);
        index |= ((ys >> i) & 1) << (2 * i);
    }
    Ok(QuadIndex(index))
}

/// The child selector (`0..4`) that `index` takes at subdivision `level`, 0 being the
/// level directly below the root.
///
/// # Panics
///
/// Panics if `level` is not below the frame's depth.
pub fn quadrant_at(frame: &Frame, index: QuadIndex, level: u32) -> u8 {
    assert!(
        level < frame.depth(),
        "level {level} is not above the frame depth {}",
        frame.depth()
    );
    let high = 2 * (frame.depth() - level);
    let low = high - 2;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The masked pair is at most 3."
    )]
    let quadrant = ((index.0 & bit_mask_range(low, high)) >> low) as u8;
    quadrant
}

/// Number of subdivision levels whose quadrant `a` and `b` share.
///
/// Levels are compared from the top down and the first differing level is returned,
/// which is also the level of the deepest quadrant containing both indices. Identical
/// indices share every level and yield the frame's depth. The result is symmetric in
/// `a` and `b`.
pub fn common_quadrant_depth(frame: &Frame, a: QuadIndex, b: QuadIndex) -> u32 {
    (0..frame.depth())
        .find(|&level| quadrant_at(frame, a, level) != quadrant_at(frame, b, level))
        .unwrap_or(frame.depth())
}
