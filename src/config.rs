// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Configuration file and environment overrides

use crate::apply::HeightPolicy;
use crate::geometry::{SlopeOptions, PARALLEL_EPSILON};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "slopekit.toml";

/// Slopekit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeConfig {
    /// Height difference at or below which anchors count as level
    pub horizontal_epsilon: f64,
    /// Relative tolerance for parallel plane detection
    pub parallel_epsilon: f64,
    /// Only apply heights within the anchors' z range
    pub inbound: bool,
    /// Align large point sets on the rayon pool
    pub parallel: bool,
    /// Verbose output
    pub verbose: bool,
}

impl Default for SlopeConfig {
    fn default() -> Self {
        Self {
            horizontal_epsilon: 0.0,
            parallel_epsilon: PARALLEL_EPSILON,
            inbound: false,
            parallel: false,
            verbose: false,
        }
    }
}

impl SlopeConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: SlopeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `slopekit.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `SLOPEKIT_*` environment variable overrides
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var("SLOPEKIT_HORIZONTAL_EPSILON") {
            self.horizontal_epsilon = value
                .parse()
                .with_context(|| format!("Invalid SLOPEKIT_HORIZONTAL_EPSILON: {}", value))?;
        }

        if let Ok(value) = std::env::var("SLOPEKIT_INBOUND") {
            self.inbound = parse_flag("SLOPEKIT_INBOUND", &value)?;
        }

        if let Ok(value) = std::env::var("SLOPEKIT_PARALLEL") {
            self.parallel = parse_flag("SLOPEKIT_PARALLEL", &value)?;
        }

        if let Ok(value) = std::env::var("SLOPEKIT_VERBOSE") {
            self.verbose = parse_flag("SLOPEKIT_VERBOSE", &value)?;
        }

        self.validate().context("Invalid SLOPEKIT_* environment override")
    }

    /// Reject tolerances the slope constructor cannot use
    pub fn validate(&self) -> Result<()> {
        self.slope_options().validate()?;
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn slope_options(&self) -> SlopeOptions {
        SlopeOptions {
            horizontal_epsilon: self.horizontal_epsilon,
            parallel_epsilon: self.parallel_epsilon,
        }
    }

    pub fn height_policy(&self) -> HeightPolicy {
        if self.inbound {
            HeightPolicy::Inbound
        } else {
            HeightPolicy::Unconditional
        }
    }
}

/// Parse a boolean environment value (`true` / `false`)
fn parse_flag(name: &str, value: &str) -> Result<bool> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {}: {:?} (expected true or false)", name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlopeConfig::default();
        assert_eq!(config.height_policy(), HeightPolicy::Unconditional);
        assert_eq!(config.slope_options(), SlopeOptions::default());
    }

    #[test]
    fn test_partial_file() {
        let config: SlopeConfig = toml::from_str("inbound = true\nhorizontal_epsilon = 0.001\n").unwrap();
        assert_eq!(config.height_policy(), HeightPolicy::Inbound);
        assert_eq!(config.horizontal_epsilon, 0.001);
        assert_eq!(config.parallel_epsilon, PARALLEL_EPSILON);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slopekit.toml");

        let config = SlopeConfig {
            inbound: true,
            parallel: true,
            ..SlopeConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(SlopeConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_epsilon_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slopekit.toml");

        std::fs::write(&path, "horizontal_epsilon = -1.0\n").unwrap();
        let err = SlopeConfig::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("horizontal_epsilon"));

        std::fs::write(&path, "parallel_epsilon = nan\n").unwrap();
        assert!(SlopeConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_validate() {
        let config = SlopeConfig {
            horizontal_epsilon: f64::INFINITY,
            ..SlopeConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(SlopeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("SLOPEKIT_INBOUND", "true").unwrap());
        assert!(!parse_flag("SLOPEKIT_INBOUND", " false ").unwrap());

        for bad in ["1", "yes", ""] {
            let err = parse_flag("SLOPEKIT_INBOUND", bad).unwrap_err();
            assert!(err.to_string().contains("SLOPEKIT_INBOUND"));
        }
    }
}
