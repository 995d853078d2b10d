// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - point files and stored slopes

mod points;
mod slope_file;

pub use points::{parse_points, points_to_json, read_points, write_points};
pub use slope_file::{load_slope, save_slope};
