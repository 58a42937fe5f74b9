// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public index API: argument validation over a pluggable backend.

use alloc::vec::Vec;
use core::marker::PhantomData;

use tracing::{debug, trace};

use crate::backend::Backend;
use crate::backends::{FlatVec, KdTree};
use crate::error::{Argument, IndexError};
use crate::types::{Aabb2D, Point2D, Scalar, ScalarAcc};

/// A point index parameterized by a backend.
///
/// Every operation validates its argument before the backend is touched, so a
/// rejected call never changes the index.
#[derive(Clone, Debug)]
pub struct IndexGeneric<T: Scalar, B: Backend<T>> {
    backend: B,
    _scalar: PhantomData<fn() -> T>,
}

impl<T, B> IndexGeneric<T, B>
where
    T: Scalar,
    B: Backend<T> + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }

    /// Create an empty index with room for at least `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut idx = Self::new();
        idx.backend.reserve(capacity);
        idx
    }

    /// Build an index from `points`, skipping duplicates.
    ///
    /// Fails without building anything if any point is invalid.
    pub fn from_points<I>(points: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = Point2D<T>>,
    {
        let mut idx = Self::new();
        idx.extend(points)?;
        Ok(idx)
    }
}

impl<T, B> Default for IndexGeneric<T, B>
where
    T: Scalar,
    B: Backend<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> IndexGeneric<T, B>
where
    T: Scalar,
    B: Backend<T>,
{
    /// Create an index over an explicit backend instance.
    ///
    /// The backend may already hold points; they are kept.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            _scalar: PhantomData,
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the index and return its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Number of distinct points in the index.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Add `point` unless an equal point is already present.
    ///
    /// Returns `Ok(true)` if the point was added and `Ok(false)` if it was
    /// already present, in which case the index is unchanged.
    pub fn insert(&mut self, point: Point2D<T>) -> Result<bool, IndexError> {
        check_point(point)?;
        let added = self.backend.insert(point);
        if !added {
            trace!(?point, "point already indexed");
        }
        Ok(added)
    }

    /// Insert every point from `points`, returning how many were new.
    ///
    /// The whole batch is validated first; if any point is invalid nothing is inserted.
    pub fn extend<I>(&mut self, points: I) -> Result<usize, IndexError>
    where
        I: IntoIterator<Item = Point2D<T>>,
    {
        let points: Vec<_> = points.into_iter().collect();
        for &point in &points {
            check_point(point)?;
        }
        self.backend.reserve(points.len());
        let mut added = 0;
        for point in points {
            if self.backend.insert(point) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Whether an equal point is present.
    pub fn contains(&self, point: Point2D<T>) -> Result<bool, IndexError> {
        check_point(point)?;
        Ok(self.backend.contains(point))
    }

    /// Query for points inside `rect` (boundary inclusive). The order is backend-dependent.
    pub fn query_rect(
        &self,
        rect: Aabb2D<T>,
    ) -> Result<impl Iterator<Item = Point2D<T>> + '_, IndexError> {
        check_rect(rect)?;
        let mut out = Vec::new();
        self.backend.visit_rect(rect, |p| out.push(p));
        Ok(out.into_iter())
    }

    /// Visit points inside `rect` (does not allocate result storage).
    ///
    /// Calls `f(point)` for each match. The order is backend-dependent.
    pub fn visit_rect<F: FnMut(Point2D<T>)>(
        &self,
        rect: Aabb2D<T>,
        f: F,
    ) -> Result<(), IndexError> {
        check_rect(rect)?;
        self.backend.visit_rect(rect, f);
        Ok(())
    }

    /// The point closest to `point` by Euclidean distance, or `None` when empty.
    ///
    /// When several points are equally close, which one is returned is unspecified.
    pub fn nearest(&self, point: Point2D<T>) -> Result<Option<Point2D<T>>, IndexError> {
        Ok(self.nearest_with_distance(point)?.map(|(p, _)| p))
    }

    /// Like [`nearest`][Self::nearest], also returning the squared distance.
    pub fn nearest_with_distance(
        &self,
        point: Point2D<T>,
    ) -> Result<Option<(Point2D<T>, ScalarAcc<T>)>, IndexError> {
        check_point(point)?;
        Ok(self.backend.nearest(point))
    }

    /// All points in the index. The order is backend-dependent.
    pub fn points(&self) -> impl Iterator<Item = Point2D<T>> + '_ {
        let mut out = Vec::with_capacity(self.len());
        self.backend.visit_points(|p| out.push(p));
        out.into_iter()
    }

    /// Visit all points in the index (does not allocate result storage).
    pub fn visit_points<F: FnMut(Point2D<T>)>(&self, f: F) {
        self.backend.visit_points(f);
    }
}

fn check_point<T: Scalar>(point: Point2D<T>) -> Result<(), IndexError> {
    if point.is_valid() {
        Ok(())
    } else {
        debug!(?point, "rejecting point");
        Err(IndexError::InvalidArgument(Argument::Point))
    }
}

fn check_rect<T: Scalar>(rect: Aabb2D<T>) -> Result<(), IndexError> {
    if rect.is_valid() {
        Ok(())
    } else {
        debug!(?rect, "rejecting rectangle");
        Err(IndexError::InvalidArgument(Argument::Rect))
    }
}

/// Point index backed by a k-d tree.
pub type SpatialIndex<T> = IndexGeneric<T, KdTree<T>>;

/// Point index backed by a flat vector with linear scans.
pub type LinearIndex<T> = IndexGeneric<T, FlatVec<T>>;
