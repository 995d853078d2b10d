// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::apply::{ApplyReport, HeightPolicy};
use crate::geometry::{Height, SlopePlane};
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a freshly stored slope
    pub fn report_slope(slope: &SlopePlane, output: Option<&str>) {
        let [p0, p1] = slope.anchors();
        let [a, b, c, d] = slope.plane().coefficients();
        let (min, max) = slope.z_range();

        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", "Slope:".bold(), Self::format_plane(a, b, c, d).cyan());
        println!("{}", "━".repeat(60).bright_black());
        println!(
            "  {} ({}, {}, {}) → ({}, {}, {})",
            "Anchors:".bright_black(),
            p0.x, p0.y, p0.z, p1.x, p1.y, p1.z
        );
        println!("  {} [{}, {}]", "Height range:".bright_black(), min, max);
        if slope.is_horizontal() {
            println!("  {}", "Horizontal".yellow());
        }
        if let Some(path) = output {
            println!("  {} {}", "Saved:".bright_black(), path.cyan());
        }
        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report the outcome of an alignment pass
    pub fn report_apply(report: &ApplyReport, policy: HeightPolicy, duration: Duration) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", "Aligned:".bold(), format!("{} point(s)", report.total()).cyan());
        println!("{}", "━".repeat(60).bright_black());
        println!("  {} {:?}", "Policy:".bright_black(), policy);
        println!("  {} {}", "Updated:".bright_black(), report.updated.to_string().green());

        let skipped = report.skipped.to_string();
        println!(
            "  {} {}",
            "Skipped:".bright_black(),
            if report.skipped > 0 { skipped.yellow() } else { skipped.green() }
        );
        if report.undefined > 0 {
            println!("  {} {}", "Undefined:".bright_black(), report.undefined.to_string().red());
        }
        println!("  {} {}", "Time:".bright_black(), Self::format_duration(duration).yellow());
        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report a single height query
    pub fn report_height(x: f64, y: f64, height: Height) {
        match height {
            Height::Defined(z) => println!("{} ({}, {}) → {}", "Height:".bold(), x, y, z.to_string().cyan()),
            Height::Undefined => println!("{} ({}, {}) → {}", "Height:".bold(), x, y, "undefined".red()),
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn format_plane(a: f64, b: f64, c: f64, d: f64) -> String {
        format!("{:.6}x + {:.6}y + {:.6}z + {:.6} = 0", a, b, c, d)
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(Reporter::format_duration(Duration::from_micros(500)), "500µs");
        assert_eq!(Reporter::format_duration(Duration::from_millis(5)), "5.00ms");
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }

    #[test]
    fn test_format_plane() {
        assert_eq!(
            Reporter::format_plane(1.0, 0.0, -1.0, 0.5),
            "1.000000x + 0.000000y + -1.000000z + 0.500000 = 0"
        );
    }
}
