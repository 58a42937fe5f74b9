// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_point_index --heading-base-level=0

//! Understory Point Index: a 2D point set with range and nearest-neighbor queries.
//!
//! Understory Point Index is a reusable building block for planar point queries.
//!
//! - Insert points; duplicates are ignored.
//! - Test membership, collect every point inside an axis-aligned rectangle, and find the
//!   nearest point to a query location.
//! - Arguments are validated up front: a rejected call returns [`IndexError`] and leaves the
//!   index untouched.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`) and does not depend on any
//! geometry crate. Squared distances use a widened accumulator (f32→f64, f64→f64, i64→i128).
//!
//! Backends are pluggable via a simple trait. The [`SpatialIndex`] alias uses a k-d tree
//! that prunes subtrees during search; [`LinearIndex`] scans a flat vector and is mainly a
//! reference to check the tree against.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support in dependencies.
//! - `libm`: lets `kurbo` build without `std`.
//! - `kurbo`: `From` conversions between [`Point2D<f64>`]/[`Aabb2D<f64>`] and
//!   `kurbo::Point`/`kurbo::Rect`. Requires `std` or `libm`.
//!
//! # Example
//!
//! ```rust
//! use understory_point_index::{Aabb2D, Point2D, SpatialIndex};
//!
//! let mut idx = SpatialIndex::<f64>::new();
//! for (x, y) in [(0.4, 0.2), (0.2, 0.1), (0.7, 0.3), (0.3, 0.6)] {
//!     idx.insert(Point2D::new(x, y))?;
//! }
//! // Inserting a point twice is a no-op.
//! assert!(!idx.insert(Point2D::new(0.3, 0.6))?);
//! assert_eq!(idx.len(), 4);
//!
//! assert!(idx.contains(Point2D::new(0.7, 0.3))?);
//!
//! let hits = idx.query_rect(Aabb2D::new(0.3, 0.1, 0.9, 0.9))?.count();
//! assert_eq!(hits, 3);
//!
//! let nearest = idx.nearest(Point2D::new(0.4, 0.5))?;
//! assert_eq!(nearest, Some(Point2D::new(0.3, 0.6)));
//! # Ok::<(), understory_point_index::IndexError>(())
//! ```
//!
//! Invalid arguments are reported rather than indexed:
//!
//! ```rust
//! use understory_point_index::{Argument, IndexError, Point2D, SpatialIndex};
//!
//! let mut idx = SpatialIndex::<f32>::new();
//! assert_eq!(
//!     idx.insert(Point2D::new(f32::NAN, 1.0)),
//!     Err(IndexError::InvalidArgument(Argument::Point)),
//! );
//! assert!(idx.is_empty());
//! ```
//!
//! ## Choosing a backend
//!
//! - `KdTree` (used by [`SpatialIndex`]): range queries touch only subtrees that can overlap
//!   the rectangle and nearest-neighbor search skips subtrees across a splitting line that is
//!   farther than the best candidate. There is no rebalancing; shape depends on insertion
//!   order, and sorted input degrades queries to linear time.
//! - `FlatVec` (used by [`LinearIndex`]): hashed membership, linear range and nearest scans.
//!
//! ### Float semantics
//!
//! Float coordinates must be finite. Equality is exact, so `-0.0` and `0.0` are the same
//! coordinate. Squared distances between extreme `f64` coordinates can overflow to infinity.

#![no_std]

extern crate alloc;

mod backend;
pub mod backends;
mod error;
mod index;
#[cfg(feature = "kurbo")]
mod interop;
mod types;

pub use backend::Backend;
pub use error::{Argument, IndexError};
pub use index::{IndexGeneric, LinearIndex, SpatialIndex};
pub use types::{Aabb2D, Axis, Point2D, Scalar, ScalarAcc};
