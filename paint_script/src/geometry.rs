// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel rectangles.

use crate::kurbo::Rect;

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "only needed when std is not available")]
use core_maths::CoreFloat;

/// An axis-aligned rectangle on the pixel grid.
///
/// The rectangle is half-open: it covers the pixels whose x coordinate is in
/// `left..right` and whose y coordinate is in `top..bottom`. A rectangle with
/// `left >= right` or `top >= bottom` is empty.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct IntRect {
    /// Minimum x coordinate.
    pub left: i32,
    /// Minimum y coordinate.
    pub top: i32,
    /// Maximum x coordinate (exclusive).
    pub right: i32,
    /// Maximum y coordinate (exclusive).
    pub bottom: i32,
}

impl IntRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from an origin and a size.
    pub const fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Returns the smallest pixel rectangle that covers `rect`.
    ///
    /// Left and top edges are floored, right and bottom edges are ceiled.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "device coordinates are well inside the i32 range"
    )]
    pub fn round_out(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(
            rect.x0.floor() as i32,
            rect.y0.floor() as i32,
            rect.x1.ceil() as i32,
            rect.y1.ceil() as i32,
        )
    }

    /// Width of the rectangle, zero if it is empty.
    pub fn width(&self) -> i32 {
        (self.right - self.left).max(0)
    }

    /// Height of the rectangle, zero if it is empty.
    pub fn height(&self) -> i32 {
        (self.bottom - self.top).max(0)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Horizontal midpoint, rounded toward negative infinity.
    pub fn center_x(&self) -> i32 {
        (self.left + self.right) >> 1
    }

    /// Vertical midpoint, rounded toward negative infinity.
    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) >> 1
    }

    /// Returns a copy translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// An empty rectangle is never contained, and an empty rectangle
    /// contains nothing.
    pub fn contains(&self, other: &Self) -> bool {
        !other.is_empty()
            && !self.is_empty()
            && self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }

    /// Whether the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// The overlap of two rectangles, or `None` if they do not intersect.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        self.intersects(other).then(|| {
            Self::new(
                self.left.max(other.left),
                self.top.max(other.top),
                self.right.min(other.right),
                self.bottom.min(other.bottom),
            )
        })
    }

    /// The bounding box of both rectangles. Empty rectangles are ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Self::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}

impl From<IntRect> for Rect {
    fn from(rect: IntRect) -> Self {
        Self::new(
            f64::from(rect.left),
            f64::from(rect.top),
            f64::from(rect.right),
            f64::from(rect.bottom),
        )
    }
}
