// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend: linear scans, no partitioning.
//!
//! Mostly useful as a reference when checking other backends, or for very
//! small sets where building a tree is not worth it.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashSet;

use crate::backend::Backend;
use crate::types::{Aabb2D, Point2D, Scalar};

/// Canonical bit key for exact point equality.
type PointKey = (u64, u64);

fn key<T: Scalar>(point: Point2D<T>) -> PointKey {
    (T::canonical_bits(point.x), T::canonical_bits(point.y))
}

/// Unordered point set answering every query by scanning all points.
#[derive(Clone)]
pub struct FlatVec<T: Scalar> {
    /// Points in insertion order.
    points: Vec<Point2D<T>>,
    seen: HashSet<PointKey>,
}

impl<T: Scalar> Debug for FlatVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("len", &self.points.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> Default for FlatVec<T> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Scalar> Backend<T> for FlatVec<T> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
        self.seen.reserve(additional);
    }

    fn insert(&mut self, point: Point2D<T>) -> bool {
        if !self.seen.insert(key(point)) {
            return false;
        }
        self.points.push(point);
        true
    }

    fn contains(&self, point: Point2D<T>) -> bool {
        self.seen.contains(&key(point))
    }

    fn visit_points<F: FnMut(Point2D<T>)>(&self, mut f: F) {
        for &p in &self.points {
            f(p);
        }
    }

    fn visit_rect<F: FnMut(Point2D<T>)>(&self, rect: Aabb2D<T>, mut f: F) {
        for &p in &self.points {
            if rect.contains_point(p) {
                f(p);
            }
        }
    }

    fn nearest(&self, point: Point2D<T>) -> Option<(Point2D<T>, T::Acc)> {
        let mut best: Option<(Point2D<T>, T::Acc)> = None;
        for &p in &self.points {
            let dist = p.distance_squared_to(point);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((p, dist));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn duplicates_are_ignored() {
        let mut set = FlatVec::<f64>::default();
        assert!(set.insert(Point2D::new(0.4, 0.2)));
        assert!(!set.insert(Point2D::new(0.4, 0.2)));
        assert!(set.insert(Point2D::new(0.0, 0.0)));
        assert!(!set.insert(Point2D::new(-0.0, 0.0)));
        assert_eq!(set.len(), 2);
        assert!(set.contains(Point2D::new(-0.0, -0.0)));
        assert!(!set.contains(Point2D::new(0.2, 0.4)));
    }

    #[test]
    fn scans_rect_and_nearest() {
        let mut set = FlatVec::<i64>::default();
        for (x, y) in [(4, 2), (2, 1), (7, 3), (3, 6)] {
            set.insert(Point2D::new(x, y));
        }

        let mut hits = Vec::new();
        set.visit_rect(Aabb2D::new(3, 1, 9, 9), |p| hits.push(p));
        assert_eq!(
            hits,
            vec![Point2D::new(4, 2), Point2D::new(7, 3), Point2D::new(3, 6)]
        );

        assert_eq!(
            set.nearest(Point2D::new(4, 5)),
            Some((Point2D::new(3, 6), 2))
        );
    }

    #[test]
    fn empty_set_answers_nothing() {
        let set = FlatVec::<f32>::default();
        assert!(set.is_empty());
        assert!(set.nearest(Point2D::new(0.0, 0.0)).is_none());
        assert_eq!(set.query_rect(Aabb2D::new(-1.0, -1.0, 1.0, 1.0)).count(), 0);
    }
}
