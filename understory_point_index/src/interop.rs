// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Kurbo geometry and index types.

use kurbo::{Point, Rect};

use crate::types::{Aabb2D, Point2D};

impl From<Point> for Point2D<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D<f64>> for Point {
    #[inline]
    fn from(p: Point2D<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Converts corners as-is. A `Rect` with `x0 > x1` or `y0 > y1` becomes an
/// invalid `Aabb2D`; call [`Rect::abs`] first to normalize it.
impl From<Rect> for Aabb2D<f64> {
    #[inline]
    fn from(r: Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}
