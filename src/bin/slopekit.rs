// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Slopekit CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use slopekit::cli::{parse_point, parse_xy, Reporter};
use slopekit::{io, SlopeConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "slopekit")]
#[command(about = "Slopekit - build slope planes and align point heights onto them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./slopekit.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a slope plane from two anchor points and store it
    Store {
        /// First anchor as X,Y,Z
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: slopekit::Point,

        /// Second anchor as X,Y,Z
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: slopekit::Point,

        /// Slope file to write
        #[arg(short, long, default_value = "slope.json")]
        output: String,

        /// Treat anchors whose heights differ by at most this much as level
        #[arg(long)]
        horizontal_epsilon: Option<f64>,
    },

    /// Align the heights of a point file onto a stored slope
    Align {
        /// Stored slope file
        #[arg(short, long, default_value = "slope.json")]
        slope: String,

        /// Input point file (JSON array of [x, y, z])
        #[arg(short, long)]
        input: String,

        /// Output point file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<String>,

        /// Only apply heights within the anchors' height range
        #[arg(long)]
        inbound: bool,

        /// Align on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Print the slope height at X,Y
    Query {
        /// Stored slope file
        #[arg(short, long, default_value = "slope.json")]
        slope: String,

        /// Coordinates as X,Y
        #[arg(value_parser = parse_xy, allow_hyphen_values = true)]
        at: (f64, f64),
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = SlopeConfig::from_file(path)?;
            config.apply_env()?;
            config
        }
        None => SlopeConfig::load()?,
    };
    config.verbose |= cli.verbose;

    let level = if config.verbose { LevelFilter::Info } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Store {
            from,
            to,
            output,
            horizontal_epsilon,
        } => {
            if let Some(epsilon) = horizontal_epsilon {
                config.horizontal_epsilon = epsilon;
                config.validate().context("Invalid --horizontal-epsilon")?;
            }
            store_command(&from, &to, &output, &config)
        }
        Commands::Align {
            slope,
            input,
            output,
            inbound,
            parallel,
        } => {
            config.inbound |= inbound;
            config.parallel |= parallel;
            let output = output.unwrap_or_else(|| input.clone());
            align_command(&slope, &input, &output, &config)
        }
        Commands::Query { slope, at } => query_command(&slope, at),
        Commands::Version => {
            println!("Slopekit v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn store_command(from: &slopekit::Point, to: &slopekit::Point, output: &str, config: &SlopeConfig) -> Result<()> {
    let slope = slopekit::store_slope(from, to, &config.slope_options(), output)
        .with_context(|| format!("Failed to store slope to {}", output))?;
    info!("slope written to {}", output);

    Reporter::report_slope(&slope, Some(output));
    Ok(())
}

fn align_command(slope: &str, input: &str, output: &str, config: &SlopeConfig) -> Result<()> {
    let start = Instant::now();
    let report = slopekit::align_file(slope, input, output, config)?;
    info!("aligned {} point(s) from {} into {}", report.total(), input, output);

    Reporter::report_apply(&report, config.height_policy(), start.elapsed());
    Reporter::success(&format!("Wrote {}", output));
    Ok(())
}

fn query_command(slope: &str, (x, y): (f64, f64)) -> Result<()> {
    let slope = io::load_slope(slope)?;
    Reporter::report_height(x, y, slope.height_at(x, y));
    Ok(())
}
