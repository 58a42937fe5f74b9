// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::fmt::Debug;

/// A point in 2D.
///
/// Equality is exact coordinate equality with no tolerance. For floats this
/// follows IEEE comparison, so `-0.0` and `0.0` are the same coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2D<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point2D<T> {
    /// Create a new point.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Point2D<T> {
    /// The coordinate compared by `axis`.
    #[inline(always)]
    pub fn coord(&self, axis: Axis) -> T {
        match axis {
            Axis::Vertical => self.x,
            Axis::Horizontal => self.y,
        }
    }
}

impl<T: Scalar> Point2D<T> {
    /// Whether both coordinates are usable by an index (see [`Scalar::is_valid`]).
    #[inline]
    pub fn is_valid(&self) -> bool {
        T::is_valid(self.x) && T::is_valid(self.y)
    }

    /// Squared Euclidean distance to `other`, in the widened accumulator type.
    #[inline]
    pub fn distance_squared_to(&self, other: Self) -> T::Acc {
        let dx = T::widen(self.x) - T::widen(other.x);
        let dy = T::widen(self.y) - T::widen(other.y);
        dx * dx + dy * dy
    }
}

impl<T> From<(T, T)> for Point2D<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// Which coordinate a k-d tree node splits on.
///
/// A `Vertical` node is split by a vertical line and compares `x`; a
/// `Horizontal` node is split by a horizontal line and compares `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Compares `x`. Used by the root.
    Vertical,
    /// Compares `y`.
    Horizontal,
}

impl Axis {
    /// The axis used by the children of a node split on `self`.
    #[inline(always)]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// Axis-aligned rectangle in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// Whether the bounds are ordered (`min <= max` on both axes).
    ///
    /// Degenerate rectangles (a line or a single point) are valid. A NaN bound
    /// makes the rectangle invalid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Whether this AABB contains the point. The boundary is inclusive on all sides.
    #[inline]
    pub fn contains_point(&self, point: Point2D<T>) -> bool {
        self.min_x <= point.x
            && self.min_y <= point.y
            && point.x <= self.max_x
            && point.y <= self.max_y
    }

    /// Determines whether this AABB overlaps with another in any way.
    ///
    /// The edge of the AABB is considered part of itself, so two AABBs that
    /// share an edge overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_point_index::Aabb2D;
    ///
    /// let a = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.intersects(&Aabb2D::new(10.0, 0.0, 20.0, 10.0)));
    /// assert!(!a.intersects(&Aabb2D::new(11.0, 0.0, 20.0, 10.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// The `[min, max]` interval covered on `axis`.
    #[inline(always)]
    pub(crate) fn bounds_on(&self, axis: Axis) -> (T, T) {
        match axis {
            Axis::Vertical => (self.min_x, self.max_x),
            Axis::Horizontal => (self.min_y, self.max_y),
        }
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> T::Acc {
        T::widen(self.max_x) - T::widen(self.min_x)
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> T::Acc {
        T::widen(self.max_y) - T::widen(self.min_y)
    }

    /// Squared Euclidean distance from `point` to the closest point of the
    /// rectangle. Zero when the point lies inside or on the boundary.
    pub fn distance_squared_to(&self, point: Point2D<T>) -> T::Acc {
        let zero = T::widen(T::zero());
        let gap = |lo: T, hi: T, v: T| {
            if v < lo {
                T::widen(lo) - T::widen(v)
            } else if v > hi {
                T::widen(v) - T::widen(hi)
            } else {
                zero
            }
        };
        let dx = gap(self.min_x, self.max_x, point.x);
        let dy = gap(self.min_y, self.max_y, point.y);
        dx * dx + dy * dy
    }
}

/// Numeric scalar abstraction for point coordinates.
///
/// Squared distances are computed in an associated widened accumulator type
/// (f32→f64, f64→f64, i64→i128) so that comparisons during nearest-neighbor
/// search do not lose precision or overflow.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type for squared distances.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Whether `v` may be stored in or used to query an index.
    ///
    /// Floats must be finite. Integers must lie strictly within ±2^62 so that a
    /// sum of two squared differences fits in `i128`.
    fn is_valid(v: Self) -> bool;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// Bit pattern identifying `v` under the scalar's equality.
    ///
    /// Values that compare equal map to the same bits, so `-0.0` and `0.0`
    /// collapse to one key. Only meaningful for valid values.
    fn canonical_bits(v: Self) -> u64;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn is_valid(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }

    #[inline]
    fn canonical_bits(v: Self) -> u64 {
        if v == 0.0 {
            0
        } else {
            u64::from(v.to_bits())
        }
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn is_valid(v: Self) -> bool {
        v.is_finite()
    }

    #[inline(always)]
    fn widen(v: Self) -> Self::Acc {
        v
    }

    #[inline]
    fn canonical_bits(v: Self) -> u64 {
        if v == 0.0 { 0 } else { v.to_bits() }
    }
}

/// Largest magnitude (exclusive) accepted for `i64` coordinates.
const I64_COORD_LIMIT: u64 = 1 << 62;

impl Scalar for i64 {
    type Acc = i128;

    #[inline(always)]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn is_valid(v: Self) -> bool {
        v.unsigned_abs() < I64_COORD_LIMIT
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }

    #[inline]
    fn canonical_bits(v: Self) -> u64 {
        u64::from_ne_bytes(v.to_ne_bytes())
    }
}

/// Helper alias for the widened accumulator type `Scalar::Acc` associated with a `T: Scalar`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;
