//! Command-line parsing for the Monte Carlo π estimator.
//!
//! Every option can also come from an `MCPI_*` environment variable (or a
//! `.env` file), so scripted runs don't need long command lines.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DEFAULT_CHART_PATH, DEFAULT_ITERATIONS, DEFAULT_REPORT_PATH, DEFAULT_SAMPLE_SIZES, ModePolicy};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "mcpi",
    version,
    about = "Estimate π by Monte Carlo sampling and export a spreadsheet report with a convergence chart"
)]
pub struct Cli {
    /// Points dropped per run; one experiment per value (comma separated).
    #[arg(
        short = 's',
        long,
        env = "MCPI_SAMPLE_SIZES",
        value_delimiter = ',',
        default_values_t = DEFAULT_SAMPLE_SIZES
    )]
    pub sample_sizes: Vec<u64>,

    /// Runs per sample size.
    #[arg(short = 'i', long, env = "MCPI_ITERATIONS", default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Random seed. Omit to seed from OS entropy.
    #[arg(long, env = "MCPI_SEED")]
    pub seed: Option<u64>,

    /// How to resolve the mode when no estimate repeats more than the others.
    #[arg(long, env = "MCPI_MODE_POLICY", value_enum, default_value_t = ModePolicy::FirstEncountered)]
    pub mode_policy: ModePolicy,

    /// Spreadsheet report path (overwritten).
    #[arg(long, env = "MCPI_REPORT", default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Convergence chart PNG path (overwritten).
    #[arg(long, env = "MCPI_CHART", default_value = DEFAULT_CHART_PATH)]
    pub chart: PathBuf,

    /// Also export all results to JSON.
    #[arg(long = "export-json", env = "MCPI_EXPORT_JSON")]
    pub export_json: Option<PathBuf>,

    /// Chart width (pixels).
    #[arg(long, default_value_t = 1000)]
    pub chart_width: u32,

    /// Chart height (pixels).
    #[arg(long, default_value_t = 600)]
    pub chart_height: u32,
}
