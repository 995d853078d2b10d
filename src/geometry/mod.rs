// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - analytic primitives and the slope plane constructor

mod primitives;
mod line;
mod plane;
mod slope;

pub use primitives::{up, vector_between, Axis, Point, Vector};
pub use line::Line;
pub use plane::{Height, Plane, PARALLEL_EPSILON};
pub use slope::{build_slope_plane, build_slope_plane_with, SlopeOptions, SlopePlane};
