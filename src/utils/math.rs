// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use crate::geometry::Point;

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Linear interpolation
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Point at fraction `t` along the segment `p0 → p1`
pub fn lerp_point(p0: &Point, p1: &Point, t: f64) -> Point {
    p0 + (p1 - p0) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0001, 0.001));
        assert!(!approx_eq(1.0, 1.1, 0.001));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn test_lerp_point() {
        let p = lerp_point(&Point::new(0.0, 0.0, 0.0), &Point::new(10.0, -4.0, 2.0), 0.25);
        assert_eq!(p, Point::new(2.5, -1.0, 0.5));
    }
}
