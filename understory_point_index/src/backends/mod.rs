// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different search strategies.
//!
//! - `kdtree`: 2D k-d tree with per-level alternating split axis (aliases: `KdTreeF32`,
//!   `KdTreeF64`, `KdTreeI64`). Range and nearest-neighbor searches prune subtrees that
//!   cannot contribute.
//! - `flatvec`: flat vector with linear scans and hashed membership. No pruning at all,
//!   which makes it a convenient reference for testing the tree.
//!
//! Nearest-neighbor pruning
//! ------------------------
//! The k-d tree visits the child on the query's side of a node first. The other child is
//! visited only when the squared distance from the query to the node's splitting line is
//! strictly less than the best squared distance found so far. Every point across the line
//! is at least that far away, so skipped subtrees can never hold a closer point.

pub(crate) mod flatvec;
pub(crate) mod kdtree;

pub use flatvec::FlatVec;
pub use kdtree::{KdTree, KdTreeF32, KdTreeF64, KdTreeI64};
