// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Kurbo rectangles and [`QuadBox`].
//!
//! ## Feature
//!
//! Enable with `kurbo_adapter`.
//!
//! ## Notes
//!
//! A `Rect` is a continuous half-open area, a `QuadBox` a set of whole pixels. Going to
//! a box rounds outward so every pixel the rectangle touches is covered; going back
//! yields the rectangle spanning those pixels.

use kurbo::Rect;

use crate::error::QuadTreeError;
use crate::types::QuadBox;

impl QuadBox {
    /// The smallest box covering every pixel `rect` touches.
    ///
    /// The rectangle is normalized first, so swapped corners are accepted. Fails for
    /// non-finite coordinates and for coordinates outside the `u32` range.
    pub fn from_rect(rect: Rect) -> Result<Self, QuadTreeError> {
        if !rect.is_finite() {
            return Err(QuadTreeError::InvalidBox("rectangle is not finite"));
        }
        let r = rect.abs().expand();
        if r.x0 < 0.0 || r.y0 < 0.0 {
            return Err(QuadTreeError::InvalidBox("rectangle has negative coordinates"));
        }
        let limit = f64::from(u32::MAX);
        if r.x0 > limit || r.y0 > limit || r.x1 - 1.0 > limit || r.y1 - 1.0 > limit {
            return Err(QuadTreeError::InvalidBox("rectangle exceeds the coordinate range"));
        }
        // Degenerate rectangles still touch the pixel they start in.
        let max_x = (r.x1 - 1.0).max(r.x0);
        let max_y = (r.y1 - 1.0).max(r.y0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Values are whole, non-negative and within u32 after the checks above."
        )]
        let b = Self {
            min_x: r.x0 as u32,
            min_y: r.y0 as u32,
            max_x: max_x as u32,
            max_y: max_y as u32,
        };
        Ok(b)
    }

    /// The rectangle spanning the pixels of this box.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.min_x),
            f64::from(self.min_y),
            f64::from(self.max_x) + 1.0,
            f64::from(self.max_y) + 1.0,
        )
    }
}

impl From<QuadBox> for Rect {
    fn from(b: QuadBox) -> Self {
        b.to_rect()
    }
}
