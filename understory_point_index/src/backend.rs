// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for point index implementations.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{Aabb2D, Point2D, Scalar};

/// Point set abstraction used by [`IndexGeneric`][crate::IndexGeneric].
///
/// Backends are unchecked: every argument is assumed to be valid (see
/// [`Point2D::is_valid`] and [`Aabb2D::is_valid`]). Passing an invalid argument
/// does not panic, but the result is unspecified. Use
/// [`IndexGeneric`][crate::IndexGeneric] to get validation.
pub trait Backend<T: Scalar> {
    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// Whether no points are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserve space for at least `additional` more points.
    fn reserve(&mut self, additional: usize);

    /// Add `point` unless an equal point is already stored.
    ///
    /// Returns `true` if the point was added.
    fn insert(&mut self, point: Point2D<T>) -> bool;

    /// Whether an equal point is stored.
    fn contains(&self, point: Point2D<T>) -> bool;

    /// Visit every stored point. The order is backend-dependent.
    fn visit_points<F: FnMut(Point2D<T>)>(&self, f: F);

    /// Visit stored points inside `rect` (boundary inclusive). The order is backend-dependent.
    fn visit_rect<F: FnMut(Point2D<T>)>(&self, rect: Aabb2D<T>, f: F);

    /// The stored point closest to `point`, with its squared distance.
    ///
    /// Returns `None` when empty. When several points are equally close, any
    /// one of them may be returned.
    fn nearest(&self, point: Point2D<T>) -> Option<(Point2D<T>, T::Acc)>;

    /// Query stored points inside `rect`.
    ///
    /// The default implementation collects [`visit_rect`][Backend::visit_rect].
    fn query_rect<'a>(&'a self, rect: Aabb2D<T>) -> Box<dyn Iterator<Item = Point2D<T>> + 'a>
    where
        T: 'a,
    {
        let mut out = Vec::new();
        self.visit_rect(rect, |p| out.push(p));
        Box::new(out.into_iter())
    }
}
