// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for the geometry engine and the slope session.
//!
//! The geometry engine never recovers from its own errors. Degenerate inputs
//! are reported as distinct variants so callers can decide whether to abort
//! or skip and continue.

use crate::geometry::Axis;
use thiserror::Error;

/// Errors raised by the analytic primitives and the slope constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A line was solved with zero or several fixed axes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The line direction has no component along the fixed axis, so the line
    /// never reaches the requested coordinate.
    #[error("line is parallel to the {axis} = const plane; no point satisfies the fixed {axis}")]
    ParallelToAxis {
        /// The axis that was held fixed
        axis: Axis,
    },

    /// Two planes are parallel or coincident and have no unique line of
    /// intersection.
    #[error("planes are parallel or coincident; no unique intersection line")]
    DegenerateIntersection,
}

/// Errors raised by [`crate::session::SlopeSession`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Storing a slope needs exactly two anchor points.
    #[error("must select exactly two vertices to store a slope (found {found})")]
    SelectionSize {
        /// Number of points that were supplied
        found: usize,
    },

    /// Aligning was requested before any slope was stored.
    #[error("must store a slope before aligning")]
    NoSlopeStored,

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
