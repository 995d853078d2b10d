// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Point, vector and axis primitives

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in 3D space, e.g. a sampled mesh vertex
pub type Point = Point3<f64>;

/// A 3D direction or displacement. Not normalized: magnitude matters for
/// cross products.
pub type Vector = Vector3<f64>;

/// Unit normal of the XOY (ground) plane
pub fn up() -> Vector {
    Vector::new(0.0, 0.0, 1.0)
}

/// Displacement from `p0` to `p1`
pub fn vector_between(p0: &Point, p1: &Point) -> Vector {
    p1 - p0
}

/// Coordinate axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into nalgebra's `Point3` / `Vector3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
