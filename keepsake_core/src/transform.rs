// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned item placement in world units.

use kurbo::{Point, Rect, Size};

/// An item's placement: top-left corner plus extent, in world units.
///
/// Items never rotate, so four scalars are enough. The animator interpolates
/// each component independently.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ItemTransform {
    /// The zero transform (origin, no extent).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a transform from its four components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a transform of the given size whose center is `center`.
    #[inline]
    #[must_use]
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Creates a transform covering `rect`.
    #[inline]
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extent.
    #[inline]
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The covered rectangle.
    #[inline]
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Moves each component a fraction `t` of the way toward `target`.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `target`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(
            lerp(self.x, target.x, t),
            lerp(self.y, target.y, t),
            lerp(self.width, target.width, t),
            lerp(self.height, target.height, t),
        )
    }

    /// Scales the extent by `s`, keeping the center fixed.
    #[must_use]
    pub fn scaled_about_center(self, s: f64) -> Self {
        let size = Size::new(self.width * s, self.height * s);
        Self::from_center(self.center(), size)
    }

    /// Largest absolute component difference between `self` and `other`.
    ///
    /// Zero iff the two transforms are identical.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.width - other.width).abs())
            .max((self.height - other.height).abs())
    }

    /// Returns `true` if every component is finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
