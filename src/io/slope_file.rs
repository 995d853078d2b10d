// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Persisted slope planes

use crate::geometry::SlopePlane;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Save a slope as pretty JSON
pub fn save_slope(path: impl AsRef<Path>, slope: &SlopePlane) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(slope).context("Failed to serialize slope")?;
    fs::write(path, json).with_context(|| format!("Failed to write slope file: {}", path.display()))
}

/// Load a slope saved by [`save_slope`]
pub fn load_slope(path: impl AsRef<Path>) -> Result<SlopePlane> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read slope file: {}", path.display()))?;

    serde_json::from_str(&source).with_context(|| format!("Failed to parse slope file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{build_slope_plane, Point};

    #[test]
    fn test_saved_slope_answers_same_heights() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("slope.json");

        let slope = build_slope_plane(&Point::new(1.0, 2.0, 3.0), &Point::new(-4.0, 6.0, 0.5))?;
        save_slope(&path, &slope)?;
        let loaded = load_slope(&path)?;

        assert_eq!(loaded.anchors(), slope.anchors());
        assert_eq!(loaded.get_z(7.0, -3.0), slope.get_z(7.0, -3.0));
        Ok(())
    }

    #[test]
    fn test_load_garbage() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("slope.json");
        fs::write(&path, "not json")?;

        let err = load_slope(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse slope file"));
        Ok(())
    }
}
