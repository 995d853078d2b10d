// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Slopekit
//!
//! Builds a slope plane from two anchor points and aligns the heights of
//! arbitrary point sets onto it, optionally restricted to the anchors'
//! height range.

pub mod apply;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod session;
pub mod utils;

pub use apply::{apply_slope, apply_slope_parallel, ApplyReport, HeightPolicy};
pub use config::SlopeConfig;
pub use error::{GeometryError, SessionError};
pub use geometry::{build_slope_plane, build_slope_plane_with, Height, Plane, Point, SlopeOptions, SlopePlane, Vector};
pub use session::SlopeSession;

use anyhow::{Context, Result};
use std::path::Path;

/// Build a slope from two anchors and save it to `path`
pub fn store_slope(p0: &Point, p1: &Point, options: &SlopeOptions, path: impl AsRef<Path>) -> Result<SlopePlane> {
    let slope = build_slope_plane_with(p0, p1, options).context("Failed to build slope plane")?;
    io::save_slope(path, &slope)?;
    Ok(slope)
}

/// Align the points in `input` onto the slope stored at `slope_path`, writing
/// the result to `output`
pub fn align_file(
    slope_path: impl AsRef<Path>,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &SlopeConfig,
) -> Result<ApplyReport> {
    let slope = io::load_slope(slope_path)?;
    let mut points = io::read_points(input)?;

    let policy = config.height_policy();
    let report = if config.parallel {
        apply_slope_parallel(&slope, &mut points, policy)
    } else {
        apply_slope(&slope, &mut points, policy)
    };

    io::write_points(output, &points)?;
    Ok(report)
}
