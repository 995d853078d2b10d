// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Implicit planes `a·x + b·y + c·z + d = 0`

use super::{Point, Vector};
use crate::error::{GeometryError, GeometryResult};
use crate::utils::approx_eq;
use serde::{Deserialize, Serialize};

/// Relative tolerance below which two normals are treated as parallel
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Result of a height query against a plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Height {
    Defined(f64),
    /// The plane is vertical (`c == 0`); it has no single height over (x, y)
    Undefined,
}

impl Height {
    pub fn value(self) -> Option<f64> {
        match self {
            Height::Defined(z) => Some(z),
            Height::Undefined => None,
        }
    }

    /// Collapse to a plain number, using `0.0` for vertical planes
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

/// Plane stored as the coefficients of its implicit equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `point` perpendicular to `normal`
    pub fn from_point_normal(point: &Point, normal: &Vector) -> Self {
        let d = -normal.dot(&point.coords);
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Plane through `point` spanned by `v` and `w` (normal = `v × w`)
    pub fn from_point_and_vectors(point: &Point, v: &Vector, w: &Vector) -> Self {
        Self::from_point_normal(point, &v.cross(w))
    }

    /// Same plane as [`Plane::from_point_and_vectors`], with the normal and
    /// offset written out as the 3x3 determinant expansion.
    pub fn from_point_and_vectors_expanded(p: &Point, v: &Vector, w: &Vector) -> Self {
        let a = v.y * w.z - w.y * v.z;
        let b = w.x * v.z - v.x * w.z;
        let c = v.x * w.y - w.x * v.y;
        let d = p.x * w.y * v.z + p.y * v.x * w.z + p.z * w.x * v.y
            - p.x * v.y * w.z
            - p.y * w.x * v.z
            - p.z * v.x * w.y;
        Self::new(a, b, c, d)
    }

    /// Horizontal plane at height `z`
    pub fn horizontal(z: f64) -> Self {
        Self::new(0.0, 0.0, 1.0, -z)
    }

    pub fn normal(&self) -> Vector {
        Vector::new(self.a, self.b, self.c)
    }

    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Residual of the implicit equation at `point`; zero on the plane
    pub fn evaluate(&self, point: &Point) -> f64 {
        self.normal().dot(&point.coords) + self.d
    }

    pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
        let norm = self.normal().norm();
        norm > 0.0 && approx_eq(self.evaluate(point) / norm, 0.0, tolerance)
    }

    pub fn is_vertical(&self) -> bool {
        self.c == 0.0
    }

    /// Direction of the line where this plane meets `other`
    pub fn intersect(&self, other: &Plane) -> GeometryResult<Vector> {
        self.intersect_with_tolerance(other, PARALLEL_EPSILON)
    }

    /// [`Plane::intersect`] with an explicit relative parallelism tolerance.
    ///
    /// The cross product of the normals is rejected when its norm is at most
    /// `tolerance · |n1| · |n2|`, i.e. when the sine of the angle between the
    /// planes is at most `tolerance`.
    pub fn intersect_with_tolerance(&self, other: &Plane, tolerance: f64) -> GeometryResult<Vector> {
        let n1 = self.normal();
        let n2 = other.normal();
        let direction = n1.cross(&n2);

        if direction.norm() <= tolerance * n1.norm() * n2.norm() {
            return Err(GeometryError::DegenerateIntersection);
        }
        Ok(direction)
    }

    /// Solve the plane equation for z at (x, y)
    pub fn height_at(&self, x: f64, y: f64) -> Height {
        if self.is_vertical() {
            return Height::Undefined;
        }
        Height::Defined((-self.a * x - self.b * y - self.d) / self.c)
    }

    /// Like [`Plane::height_at`], but a vertical plane reports height `0.0`
    pub fn get_z(&self, x: f64, y: f64) -> f64 {
        self.height_at(x, y).or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_point_normal() {
        let plane = Plane::from_point_normal(&Point::new(1.0, 2.0, 3.0), &Vector::new(0.0, 0.0, 2.0));
        assert_eq!(plane.coefficients(), [0.0, 0.0, 2.0, -6.0]);
        assert_relative_eq!(plane.get_z(100.0, -50.0), 3.0);
    }

    #[test]
    fn test_vector_forms_agree() {
        let p = Point::new(3.5, -1.25, 7.0);
        let v = Vector::new(1.5, 2.0, -0.75);
        let w = Vector::new(-4.0, 0.5, 2.25);

        let cross = Plane::from_point_and_vectors(&p, &v, &w);
        let expanded = Plane::from_point_and_vectors_expanded(&p, &v, &w);

        for (lhs, rhs) in cross.coefficients().iter().zip(expanded.coefficients()) {
            assert_relative_eq!(*lhs, rhs, max_relative = 1e-9);
        }
        assert!(cross.contains(&p, 1e-9));
        assert!(cross.contains(&(p + v), 1e-9));
        assert!(cross.contains(&(p + w), 1e-9));
    }

    #[test]
    fn test_intersect_direction() {
        let ground = Plane::horizontal(0.0);
        let wall = Plane::from_point_normal(&Point::origin(), &Vector::new(1.0, 0.0, 0.0));

        let direction = ground.intersect(&wall).unwrap();
        assert_relative_eq!(direction.normalize().cross(&Vector::y()).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_parallel() {
        let plane = Plane::horizontal(1.0);
        assert_eq!(plane.intersect(&plane), Err(GeometryError::DegenerateIntersection));
        assert_eq!(
            plane.intersect(&Plane::horizontal(-4.0)),
            Err(GeometryError::DegenerateIntersection)
        );
    }

    #[test]
    fn test_vertical_height() {
        let wall = Plane::from_point_normal(&Point::new(2.0, 0.0, 0.0), &Vector::new(1.0, 1.0, 0.0));
        assert_eq!(wall.height_at(1.0, 1.0), Height::Undefined);
        assert_eq!(wall.get_z(1.0, 1.0), 0.0);
    }
}
