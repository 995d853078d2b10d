// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Parametric lines: `P(t) = origin + t * direction`

use super::{Axis, Point, Vector};
use crate::error::{GeometryError, GeometryResult};

/// An infinite line through `origin` along `direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point,
    direction: Vector,
}

impl Line {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Line through two points, directed from `p0` to `p1`
    pub fn through(p0: &Point, p1: &Point) -> Self {
        Self::new(*p0, p1 - p0)
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }

    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Evaluate the parametric form at `t`
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Point on the line whose `axis` coordinate equals `value`.
    ///
    /// The fixed coordinate is returned exactly as given; the other two are
    /// solved from `t = (value - origin[axis]) / direction[axis]`.
    pub fn point_at(&self, axis: Axis, value: f64) -> GeometryResult<Point> {
        let i = axis.index();
        let step = self.direction[i];
        if step == 0.0 {
            return Err(GeometryError::ParallelToAxis { axis });
        }

        let t = (value - self.origin[i]) / step;
        let mut point = self.at(t);
        point[i] = value;
        Ok(point)
    }

    /// Keyword-style variant of [`Line::point_at`]: exactly one of `x`, `y`,
    /// `z` must be given.
    pub fn solve(&self, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> GeometryResult<Point> {
        let fixed: Vec<(Axis, f64)> = Axis::ALL
            .iter()
            .zip([x, y, z])
            .filter_map(|(axis, value)| value.map(|v| (*axis, v)))
            .collect();

        match fixed.as_slice() {
            [(axis, value)] => self.point_at(*axis, *value),
            _ => Err(GeometryError::InvalidInput(format!(
                "exactly one axis must be fixed when solving a line, got {}",
                fixed.len()
            ))),
        }
    }
}
