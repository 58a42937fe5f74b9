// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

use thiserror::Error;

/// Errors reported by [`IndexGeneric`][crate::IndexGeneric].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// An argument was rejected before the index was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(Argument),
}

/// The kind of argument rejected by [`IndexError::InvalidArgument`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Argument {
    /// A point with a coordinate that is not finite (floats) or out of range (integers).
    Point,
    /// A rectangle whose bounds are unordered or NaN.
    Rect,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => f.write_str("point coordinates are not finite or out of range"),
            Self::Rect => f.write_str("rectangle bounds are unordered or NaN"),
        }
    }
}
