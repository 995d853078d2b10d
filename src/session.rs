// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Remembered slope for the store / align workflow

use crate::apply::{apply_slope, ApplyReport, HeightPolicy};
use crate::error::SessionError;
use crate::geometry::{build_slope_plane_with, Point, SlopeOptions, SlopePlane};
use log::{debug, info};

/// Holds at most one stored slope. Storing again replaces it.
#[derive(Debug, Clone, Default)]
pub struct SlopeSession {
    slope: Option<SlopePlane>,
    options: SlopeOptions,
    policy: HeightPolicy,
}

impl SlopeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: SlopeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_policy(mut self, policy: HeightPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The currently stored slope, if any
    pub fn slope(&self) -> Option<&SlopePlane> {
        self.slope.as_ref()
    }

    /// Build a slope from exactly two selected points and remember it
    pub fn store(&mut self, selection: &[Point]) -> Result<&SlopePlane, SessionError> {
        let [p0, p1] = selection else {
            return Err(SessionError::SelectionSize {
                found: selection.len(),
            });
        };

        let slope = build_slope_plane_with(p0, p1, &self.options)?;
        if self.slope.is_some() {
            debug!("replacing stored slope");
        }
        info!("stored slope between z={} and z={}", p0.z, p1.z);
        Ok(&*self.slope.insert(slope))
    }

    /// Apply the stored slope to `targets`
    pub fn align(&self, targets: &mut [Point]) -> Result<ApplyReport, SessionError> {
        let slope = self.slope.as_ref().ok_or(SessionError::NoSlopeStored)?;
        Ok(apply_slope(slope, targets, self.policy))
    }

    /// Forget the stored slope
    pub fn clear(&mut self) -> Option<SlopePlane> {
        self.slope.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_align_without_slope() {
        let session = SlopeSession::new();
        let mut targets = vec![Point::new(1.0, 1.0, 1.0)];
        assert_eq!(session.align(&mut targets), Err(SessionError::NoSlopeStored));
    }

    #[test]
    fn test_store_requires_two_points() {
        let mut session = SlopeSession::new();
        assert_eq!(
            session.store(&[Point::origin()]).unwrap_err(),
            SessionError::SelectionSize { found: 1 }
        );
        assert_eq!(
            session.store(&[Point::origin(); 3]).unwrap_err(),
            SessionError::SelectionSize { found: 3 }
        );
        assert!(session.slope().is_none());
    }

    #[test]
    fn test_store_replaces_previous() {
        let mut session = SlopeSession::new();
        session
            .store(&[Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 10.0)])
            .unwrap();
        session
            .store(&[Point::new(0.0, 0.0, 2.0), Point::new(0.0, 10.0, 2.0)])
            .unwrap();

        let mut targets = vec![Point::new(5.0, 5.0, 0.0)];
        session.align(&mut targets).unwrap();
        assert_eq!(targets[0].z, 2.0);

        assert!(session.clear().is_some());
        assert!(session.slope().is_none());
    }

    #[test]
    fn test_inbound_session() {
        let mut session = SlopeSession::new().with_policy(HeightPolicy::Inbound);
        session
            .store(&[Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 10.0)])
            .unwrap();

        let mut targets = vec![Point::new(5.0, 0.0, 0.0), Point::new(-4.0, 0.0, 0.0)];
        let report = session.align(&mut targets).unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(report.skipped, 1);
        assert_relative_eq!(targets[0].z, 5.0, epsilon = 1e-9);
        assert_eq!(targets[1].z, 0.0);
    }
}
