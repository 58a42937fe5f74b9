// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared inputs for the Understory benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_point_index::{Aabb2D, Point2D};

/// Seed shared by all generators so runs are comparable.
const SEED: u64 = 0x5eed_1dea;

/// `n` points drawn uniformly from the unit square.
pub fn uniform_points(n: usize) -> Vec<Point2D<f64>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n)
        .map(|_| Point2D::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect()
}

/// `n` points on the diagonal in increasing order: the worst case for an unbalanced k-d tree.
pub fn sorted_points(n: usize) -> Vec<Point2D<f64>> {
    let step = 1.0 / n.max(1) as f64;
    (0..n)
        .map(|i| {
            let t = i as f64 * step;
            Point2D::new(t, t)
        })
        .collect()
}

/// `n` square query rectangles with side `side`, placed uniformly inside the unit square.
pub fn query_rects(n: usize, side: f64) -> Vec<Aabb2D<f64>> {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    (0..n)
        .map(|_| {
            let x = rng.random_range(0.0..1.0 - side);
            let y = rng.random_range(0.0..1.0 - side);
            Aabb2D::new(x, y, x + side, y + side)
        })
        .collect()
}

/// `n` query points drawn uniformly from the unit square.
pub fn query_points(n: usize) -> Vec<Point2D<f64>> {
    let mut rng = StdRng::seed_from_u64(SEED ^ 2);
    (0..n)
        .map(|_| Point2D::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic_and_in_range() {
        assert_eq!(uniform_points(64), uniform_points(64));
        let rects = query_rects(32, 0.1);
        assert!(
            rects
                .iter()
                .all(|r| r.is_valid() && r.min_x >= 0.0 && r.max_x <= 1.0 + 1e-12),
            "query rects must lie in the unit square"
        );
        let sorted = sorted_points(10);
        assert!(
            sorted.windows(2).all(|w| w[0].x < w[1].x),
            "sorted points must increase"
        );
    }
}
