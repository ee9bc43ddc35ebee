//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the simulation, statistics, plot and report stages
//! - exported to JSON alongside the workbook

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Reference value of π drawn on the convergence chart.
pub const REFERENCE_PI: f64 = 3.14159;

pub const DEFAULT_SAMPLE_SIZES: [u64; 4] = [1_000, 10_000, 100_000, 1_000_000];
pub const DEFAULT_ITERATIONS: u32 = 10;
pub const DEFAULT_REPORT_PATH: &str = "MonteCarlo_Pi_Estimation.xlsx";
pub const DEFAULT_CHART_PATH: &str = "MonteCarlo_Pi_Convergence.png";

/// Accepted chart width and height, in pixels.
pub const MIN_CHART_DIM: u32 = 100;
pub const MAX_CHART_DIM: u32 = 10_000;

/// How the mode of a set of estimates is resolved when no value is strictly
/// more frequent than every other.
///
/// Estimates are continuous, so repeated values are rare and the mode is close
/// to meaningless as a statistic. It is kept for parity with the historical
/// report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModePolicy {
    /// Among the values sharing the highest count, take the one seen first.
    #[default]
    #[value(name = "first")]
    #[serde(rename = "first")]
    FirstEncountered,
    /// Fail with `NoUniqueMode` unless exactly one value has the highest count.
    Strict,
}

/// One sample-size setting: how many points per run, and how many runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSizeConfig {
    pub points: u64,
    pub iterations: u32,
}

impl SampleSizeConfig {
    pub fn new(points: u64, iterations: u32) -> Self {
        Self { points, iterations }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.points == 0 {
            return Err(AppError::invalid_config("Sample size must be >= 1."));
        }
        if self.iterations == 0 {
            return Err(AppError::invalid_config("Iteration count must be >= 1."));
        }
        Ok(())
    }
}

/// Outcome of all runs at one sample size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    pub sample_size: u64,
    /// Estimates in the order the runs were executed.
    pub estimates: Vec<f64>,
    pub mean: f64,
    pub mode: f64,
}

impl ExperimentResult {
    pub fn abs_error(&self) -> f64 {
        (self.mean - std::f64::consts::PI).abs()
    }
}

/// Full configuration for one `mcpi` run.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub sample_sizes: Vec<u64>,
    pub iterations: u32,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub mode_policy: ModePolicy,
    pub report_path: PathBuf,
    pub chart_path: PathBuf,
    pub export_json: Option<PathBuf>,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            mode_policy: ModePolicy::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            export_json: None,
            chart_width: 1000,
            chart_height: 600,
        }
    }
}

impl ExperimentConfig {
    /// Per-size configurations in the order they will be run.
    pub fn sample_configs(&self) -> Vec<SampleSizeConfig> {
        self.sample_sizes
            .iter()
            .map(|&points| SampleSizeConfig::new(points, self.iterations))
            .collect()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.sample_sizes.is_empty() {
            return Err(AppError::invalid_config("At least one sample size is required."));
        }
        for cfg in self.sample_configs() {
            cfg.validate()?;
        }
        let dims = MIN_CHART_DIM..=MAX_CHART_DIM;
        if !dims.contains(&self.chart_width) || !dims.contains(&self.chart_height) {
            return Err(AppError::invalid_config(format!(
                "Chart size must be between {MIN_CHART_DIM}x{MIN_CHART_DIM} and {MAX_CHART_DIM}x{MAX_CHART_DIM} pixels; got {}x{}.",
                self.chart_width, self.chart_height
            )));
        }
        Ok(())
    }
}
