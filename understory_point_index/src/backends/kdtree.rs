// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! K-d tree backend for 2D points.
//!
//! Nodes live in a flat arena and link to their children by index. The root
//! splits on [`Axis::Vertical`] and every level below flips the axis. A node's
//! left subtree holds points whose coordinate on the node's axis is `<=` the
//! node's own; the right subtree holds the strictly greater ones. There is no
//! rebalancing, so the shape depends only on insertion order.
//!
//! All traversals use an explicit stack, which keeps degenerate trees (for
//! example, points inserted in sorted order) from exhausting the call stack.

use alloc::vec::Vec;
use core::fmt::Debug;

use smallvec::{SmallVec, smallvec};

use crate::backend::Backend;
use crate::types::{Aabb2D, Axis, Point2D, Scalar};

/// Index of a node in the arena.
type NodeIdx = u32;

/// Arena slot of the root node.
const ROOT: NodeIdx = 0;

#[derive(Clone, Debug)]
struct Node<T> {
    point: Point2D<T>,
    axis: Axis,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

impl<T: Scalar> Node<T> {
    /// Whether `point` descends into the left subtree. Ties on the axis go left.
    #[inline(always)]
    fn goes_left(&self, point: Point2D<T>) -> bool {
        point.coord(self.axis) <= self.point.coord(self.axis)
    }
}

/// K-d tree over 2D points.
#[derive(Clone)]
pub struct KdTree<T: Scalar> {
    nodes: Vec<Node<T>>,
    height: usize,
}

impl<T: Scalar> Debug for KdTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.nodes.len())
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> KdTree<T> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            height: 0,
        }
    }

    /// Create an empty tree with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            height: 0,
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// Zero when empty, one for a single point, and equal to [`len`][Backend::len]
    /// when points were inserted in sorted order along both axes.
    pub fn height(&self) -> usize {
        self.height
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node indices are intentionally 32-bit; trees beyond u32::MAX nodes are unsupported."
    )]
    fn push_node(&mut self, point: Point2D<T>, axis: Axis) -> NodeIdx {
        debug_assert!(
            self.nodes.len() < NodeIdx::MAX as usize,
            "kd-tree arena exceeds 32-bit node indices"
        );
        let idx = self.nodes.len() as NodeIdx;
        self.nodes.push(Node {
            point,
            axis,
            left: None,
            right: None,
        });
        idx
    }

    #[inline(always)]
    fn node(&self, idx: NodeIdx) -> &Node<T> {
        &self.nodes[idx as usize]
    }
}

impl<T: Scalar> Backend<T> for KdTree<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    fn insert(&mut self, point: Point2D<T>) -> bool {
        if self.nodes.is_empty() {
            self.push_node(point, Axis::Vertical);
            self.height = 1;
            return true;
        }

        let mut idx = ROOT;
        let mut depth = 1;
        loop {
            let node = self.node(idx);
            if node.point == point {
                return false;
            }
            let go_left = node.goes_left(point);
            let child = if go_left { node.left } else { node.right };
            depth += 1;
            match child {
                Some(next) => idx = next,
                None => {
                    let axis = node.axis.flip();
                    let new = self.push_node(point, axis);
                    let parent = &mut self.nodes[idx as usize];
                    if go_left {
                        parent.left = Some(new);
                    } else {
                        parent.right = Some(new);
                    }
                    self.height = self.height.max(depth);
                    return true;
                }
            }
        }
    }

    fn contains(&self, point: Point2D<T>) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let mut idx = ROOT;
        loop {
            let node = self.node(idx);
            if node.point == point {
                return true;
            }
            let child = if node.goes_left(point) {
                node.left
            } else {
                node.right
            };
            match child {
                Some(next) => idx = next,
                None => return false,
            }
        }
    }

    fn visit_points<F: FnMut(Point2D<T>)>(&self, mut f: F) {
        for node in &self.nodes {
            f(node.point);
        }
    }

    fn visit_rect<F: FnMut(Point2D<T>)>(&self, rect: Aabb2D<T>, mut f: F) {
        if self.nodes.is_empty() {
            return;
        }
        let mut stack: SmallVec<[NodeIdx; 32]> = smallvec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            let split = node.point.coord(node.axis);
            let (lo, hi) = rect.bounds_on(node.axis);
            // The right subtree is strictly greater than `split`, the left is `<=`.
            if split > hi {
                stack.extend(node.left);
            } else if split < lo {
                stack.extend(node.right);
            } else {
                stack.extend(node.left);
                stack.extend(node.right);
            }
            if rect.contains_point(node.point) {
                f(node.point);
            }
        }
    }

    fn nearest(&self, point: Point2D<T>) -> Option<(Point2D<T>, T::Acc)> {
        if self.nodes.is_empty() {
            return None;
        }

        // Each entry carries the squared distance from `point` to the splitting
        // line that separates it from the query side, if any. It is re-checked
        // against the best distance when popped, after the near side is done.
        let mut stack: SmallVec<[(NodeIdx, Option<T::Acc>); 32]> = smallvec![(ROOT, None)];
        let mut best: Option<(Point2D<T>, T::Acc)> = None;

        while let Some((idx, line_dist)) = stack.pop() {
            if let (Some(line_dist), Some((_, best_dist))) = (line_dist, best)
                && line_dist >= best_dist
            {
                continue;
            }

            let node = self.node(idx);
            let dist = node.point.distance_squared_to(point);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((node.point, dist));
            }

            let (near, far) = if node.goes_left(point) {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            if let Some(far) = far {
                let offset = T::widen(point.coord(node.axis)) - T::widen(node.point.coord(node.axis));
                stack.push((far, Some(offset * offset)));
            }
            // Pushed last so the whole near subtree is searched before `far` is popped.
            if let Some(near) = near {
                stack.push((near, None));
            }
        }

        best
    }
}

/// K-d tree backend over `f32` coordinates.
pub type KdTreeF32 = KdTree<f32>;
/// K-d tree backend over `f64` coordinates.
pub type KdTreeF64 = KdTree<f64>;
/// K-d tree backend over `i64` coordinates.
pub type KdTreeI64 = KdTree<i64>;
