// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for Slopekit

pub mod args;
pub mod reporter;

pub use args::{parse_point, parse_xy};
pub use reporter::Reporter;
