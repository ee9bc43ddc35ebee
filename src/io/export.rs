//! Export all results to JSON.
//!
//! The export carries everything needed to re-plot or compare runs without
//! opening the workbook.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ExperimentConfig, ExperimentResult, ModePolicy};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub iterations: u32,
    pub mode_policy: ModePolicy,
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    pub sample_size: u64,
    pub mean: f64,
    pub mode: f64,
    /// |mean - π|
    pub abs_error: f64,
    pub estimates: Vec<f64>,
}

impl ResultsFile {
    pub fn new(results: &[ExperimentResult], config: &ExperimentConfig) -> Self {
        Self {
            tool: "mcpi".to_string(),
            generated_at: Utc::now(),
            seed: config.seed,
            iterations: config.iterations,
            mode_policy: config.mode_policy,
            results: results
                .iter()
                .map(|r| ResultEntry {
                    sample_size: r.sample_size,
                    mean: r.mean,
                    mode: r.mode,
                    abs_error: r.abs_error(),
                    estimates: r.estimates.clone(),
                })
                .collect(),
        }
    }
}

/// Write all results to a JSON file.
pub fn write_results_json(
    path: &Path,
    results: &[ExperimentResult],
    config: &ExperimentConfig,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::file_write(format!("Failed to create results JSON '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &ResultsFile::new(results, config))
        .map_err(|e| AppError::file_write(format!("Failed to write results JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::file_write(format!("Failed to write results JSON: {e}")))?;

    tracing::info!(path = %path.display(), "results JSON written");
    Ok(())
}
