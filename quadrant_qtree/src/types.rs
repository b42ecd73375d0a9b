// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boxes and configuration flags.

use crate::error::QuadTreeError;

/// Axis-aligned box with inclusive integer corners.
///
/// `(min_x, min_y)` and `(max_x, max_y)` both lie inside the box, so a single point is
/// a box whose corners coincide. Boxes with `max < min` on either axis are rejected
/// rather than reinterpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuadBox {
    /// Smallest x coordinate covered.
    pub min_x: u32,
    /// Smallest y coordinate covered.
    pub min_y: u32,
    /// Largest x coordinate covered.
    pub max_x: u32,
    /// Largest y coordinate covered.
    pub max_y: u32,
}

impl QuadBox {
    /// Create a box from its two inclusive corners.
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Result<Self, QuadTreeError> {
        let b = Self {
            min_x,
            min_y,
            max_x,
            max_y,
        };
        b.validate()?;
        Ok(b)
    }

    /// A box covering the single point `(x, y)`.
    pub const fn point(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// The box covering the `w × h` pixels starting at `(x, y)`.
    ///
    /// Fails if the size is zero or the far edge overflows.
    pub fn from_xywh(x: u32, y: u32, w: u32, h: u32) -> Result<Self, QuadTreeError> {
        if w == 0 || h == 0 {
            return Err(QuadTreeError::InvalidBox("zero width or height"));
        }
        let max_x = x
            .checked_add(w - 1)
            .ok_or(QuadTreeError::InvalidBox("x extent overflows"))?;
        let max_y = y
            .checked_add(h - 1)
            .ok_or(QuadTreeError::InvalidBox("y extent overflows"))?;
        Ok(Self {
            min_x: x,
            min_y: y,
            max_x,
            max_y,
        })
    }

    /// Check that the corners are ordered. Fields are public, so boxes built by hand
    /// are checked again wherever the quad-tree consumes them.
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if self.max_x < self.min_x {
            return Err(QuadTreeError::InvalidBox("max_x is less than min_x"));
        }
        if self.max_y < self.min_y {
            return Err(QuadTreeError::InvalidBox("max_y is less than min_y"));
        }
        Ok(())
    }

    /// Width in covered pixels.
    pub const fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in covered pixels.
    pub const fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Whether `(x, y)` lies inside the box.
    pub const fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Whether the two boxes share at least one point.
    pub const fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

bitflags::bitflags! {
    /// Behavior switches for a [`QuadTree`](crate::QuadTree), fixed at construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Options: u8 {
        /// Emit `log::debug!` records for subdivision, inserts and teardown.
        const VERBOSE            = 0b0000_0001;
        /// Check the whole structure after every mutation and panic on corruption.
        const STRICT_CONSISTENCY = 0b0000_0010;
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_boxes_are_rejected() {
        assert!(QuadBox::new(1, 1, 1, 1).is_ok());
        assert!(matches!(
            QuadBox::new(5, 0, 4, 0),
            Err(QuadTreeError::InvalidBox(_))
        ));
        assert!(matches!(
            QuadBox::new(0, 5, 0, 4),
            Err(QuadTreeError::InvalidBox(_))
        ));
    }

    #[test]
    fn xywh_covers_pixels() {
        let b = QuadBox::from_xywh(10, 20, 3, 1).unwrap();
        assert_eq!(b, QuadBox::new(10, 20, 12, 20).unwrap());
        assert_eq!((b.width(), b.height()), (3, 1));
        assert!(b.contains_point(12, 20));
        assert!(!b.contains_point(13, 20));
        assert!(QuadBox::from_xywh(0, 0, 0, 1).is_err());
        assert!(QuadBox::from_xywh(u32::MAX, 0, 2, 1).is_err());
        assert!(QuadBox::from_xywh(u32::MAX, 0, 1, 1).is_ok());
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = QuadBox::new(0, 0, 9, 9).unwrap();
        let b = QuadBox::new(9, 9, 12, 12).unwrap();
        let c = QuadBox::new(10, 0, 12, 9).unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c), "inclusive corners must not overlap across the gap");
    }

    #[test]
    fn options_default_is_empty() {
        assert_eq!(Options::default(), Options::empty());
        assert!(!Options::default().contains(Options::VERBOSE));
    }
}
