// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Slope plane construction from two anchor points.
//!
//! The slope plane contains the anchor line `p0 → p1` and is level in the
//! horizontal direction perpendicular to it. It is built by intersecting the
//! plane perpendicular to the anchor line with the ground plane, which yields
//! that level direction, and spanning the result with the anchor direction.

use super::plane::{Height, Plane, PARALLEL_EPSILON};
use super::{up, vector_between, Axis, Line, Point};
use crate::error::{GeometryError, GeometryResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Tunables for [`build_slope_plane_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeOptions {
    /// Anchors whose heights differ by at most this much produce a horizontal
    /// plane. `0.0` means exact equality.
    pub horizontal_epsilon: f64,
    /// Relative tolerance for the plane intersection step
    pub parallel_epsilon: f64,
}

impl Default for SlopeOptions {
    fn default() -> Self {
        Self {
            horizontal_epsilon: 0.0,
            parallel_epsilon: PARALLEL_EPSILON,
        }
    }
}

impl SlopeOptions {
    /// Checked constructor; both tolerances must be finite and non-negative
    pub fn new(horizontal_epsilon: f64, parallel_epsilon: f64) -> GeometryResult<Self> {
        let options = Self {
            horizontal_epsilon,
            parallel_epsilon,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> GeometryResult<()> {
        for (name, value) in [
            ("horizontal_epsilon", self.horizontal_epsilon),
            ("parallel_epsilon", self.parallel_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidInput(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

fn check_anchor(name: &str, point: &Point) -> GeometryResult<()> {
    if point.coords.iter().all(|c| c.is_finite()) {
        return Ok(());
    }
    Err(GeometryError::InvalidInput(format!(
        "anchor {} has a non-finite coordinate: ({}, {}, {})",
        name, point.x, point.y, point.z
    )))
}

/// A slope plane together with the anchors it was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopePlane {
    plane: Plane,
    anchors: [Point; 2],
}

impl SlopePlane {
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn anchors(&self) -> &[Point; 2] {
        &self.anchors
    }

    /// Inclusive height range spanned by the anchors
    pub fn z_range(&self) -> (f64, f64) {
        let [p0, p1] = self.anchors;
        (p0.z.min(p1.z), p0.z.max(p1.z))
    }

    pub fn in_range(&self, z: f64) -> bool {
        let (min, max) = self.z_range();
        z >= min && z <= max
    }

    pub fn is_horizontal(&self) -> bool {
        self.plane.a == 0.0 && self.plane.b == 0.0
    }

    pub fn height_at(&self, x: f64, y: f64) -> Height {
        self.plane.height_at(x, y)
    }

    pub fn get_z(&self, x: f64, y: f64) -> f64 {
        self.plane.get_z(x, y)
    }
}

/// Build a slope plane with exact-equality horizontal detection
pub fn build_slope_plane(p0: &Point, p1: &Point) -> GeometryResult<SlopePlane> {
    build_slope_plane_with(p0, p1, &SlopeOptions::default())
}

/// Build the slope plane through `p0` and `p1`.
///
/// Anchors directly above one another have no level direction and fail with
/// [`crate::error::GeometryError::DegenerateIntersection`].
pub fn build_slope_plane_with(
    p0: &Point,
    p1: &Point,
    options: &SlopeOptions,
) -> GeometryResult<SlopePlane> {
    options.validate()?;
    check_anchor("p0", p0)?;
    check_anchor("p1", p1)?;
    let anchors = [*p0, *p1];

    if (p1.z - p0.z).abs() <= options.horizontal_epsilon {
        debug!("anchors level at z={}, using horizontal plane", p0.z);
        return Ok(SlopePlane {
            plane: Plane::from_point_normal(p0, &up()),
            anchors,
        });
    }

    let v = vector_between(p0, p1);
    let ground_point = Line::new(*p0, v).point_at(Axis::Z, 0.0)?;

    let perpendicular = Plane::from_point_normal(&ground_point, &v);
    let ground = Plane::from_point_normal(&ground_point, &up());
    let level = perpendicular.intersect_with_tolerance(&ground, options.parallel_epsilon)?;

    let plane = Plane::from_point_and_vectors(&ground_point, &v, &level);
    debug!(
        "slope plane through {:?} -> {:?}: {:?}",
        p0.coords.as_slice(),
        p1.coords.as_slice(),
        plane.coefficients()
    );

    Ok(SlopePlane { plane, anchors })
}
