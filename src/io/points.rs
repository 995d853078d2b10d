// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON point files: an array of `[x, y, z]` triples

use crate::geometry::Point;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse points from JSON text
pub fn parse_points(source: &str) -> Result<Vec<Point>> {
    let triples: Vec<[f64; 3]> =
        serde_json::from_str(source).context("Expected a JSON array of [x, y, z] triples")?;
    Ok(triples.into_iter().map(Point::from).collect())
}

/// Render points as pretty JSON
pub fn points_to_json(points: &[Point]) -> Result<String> {
    let triples: Vec<[f64; 3]> = points.iter().map(|p| [p.x, p.y, p.z]).collect();
    Ok(serde_json::to_string_pretty(&triples)?)
}

/// Read a point file
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read point file: {}", path.display()))?;

    parse_points(&source).with_context(|| format!("Failed to parse point file: {}", path.display()))
}

/// Write a point file
pub fn write_points(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, points_to_json(points)?)
        .with_context(|| format!("Failed to write point file: {}", path.display()))
}
