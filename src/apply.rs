// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch height alignment of target points onto a slope plane

use crate::geometry::{Height, Point, SlopePlane};
use log::warn;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Which computed heights are written back to targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightPolicy {
    /// Every target takes the plane height
    #[default]
    Unconditional,
    /// Only heights inside the anchors' inclusive z range are applied
    Inbound,
}

/// Counts from one alignment pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplyReport {
    pub updated: usize,
    /// Left untouched because the height fell outside the inbound range
    pub skipped: usize,
    /// Left untouched because the plane is vertical
    pub undefined: usize,
}

impl ApplyReport {
    pub fn total(&self) -> usize {
        self.updated + self.skipped + self.undefined
    }
}

impl Add for ApplyReport {
    type Output = ApplyReport;

    fn add(self, other: ApplyReport) -> ApplyReport {
        ApplyReport {
            updated: self.updated + other.updated,
            skipped: self.skipped + other.skipped,
            undefined: self.undefined + other.undefined,
        }
    }
}

/// Align a single target, returning its contribution to the report
fn align_point(slope: &SlopePlane, target: &mut Point, policy: HeightPolicy) -> ApplyReport {
    match slope.height_at(target.x, target.y) {
        Height::Undefined => ApplyReport {
            undefined: 1,
            ..ApplyReport::default()
        },
        Height::Defined(z) if policy == HeightPolicy::Inbound && !slope.in_range(z) => ApplyReport {
            skipped: 1,
            ..ApplyReport::default()
        },
        Height::Defined(z) => {
            target.z = z;
            ApplyReport {
                updated: 1,
                ..ApplyReport::default()
            }
        }
    }
}

fn log_report(report: &ApplyReport) {
    if report.skipped > 0 {
        warn!("{} target(s) out of the slope's height range were left unchanged", report.skipped);
    }
    if report.undefined > 0 {
        warn!("{} target(s) have no defined height on a vertical plane", report.undefined);
    }
}

/// Overwrite the z coordinate of every target according to `policy`
pub fn apply_slope(slope: &SlopePlane, targets: &mut [Point], policy: HeightPolicy) -> ApplyReport {
    let report = targets
        .iter_mut()
        .map(|target| align_point(slope, target, policy))
        .fold(ApplyReport::default(), Add::add);

    log_report(&report);
    report
}

/// [`apply_slope`] across the rayon thread pool
pub fn apply_slope_parallel(slope: &SlopePlane, targets: &mut [Point], policy: HeightPolicy) -> ApplyReport {
    let report = targets
        .par_iter_mut()
        .map(|target| align_point(slope, target, policy))
        .reduce(ApplyReport::default, Add::add);

    log_report(&report);
    report
}
