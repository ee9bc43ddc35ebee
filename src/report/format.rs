//! Console formatting.
//!
//! Kept in one place so the simulation and export code stay free of
//! presentation details.

use std::path::Path;

use crate::domain::ExperimentResult;

const COL: usize = 15;

/// Table header plus the dashed rule under it.
pub fn format_console_header() -> String {
    format!(
        "{:<COL$}{:<COL$}{:<COL$}\n{}",
        "Total Points",
        "Mean π",
        "Mode π",
        "-".repeat(COL * 3)
    )
}

/// One console row for a finished sample size.
pub fn format_console_row(result: &ExperimentResult) -> String {
    format!(
        "{:<COL$}{:<COL$.6}{:<COL$.6}",
        result.sample_size, result.mean, result.mode
    )
}

pub fn format_saved_line(report_path: &Path) -> String {
    format!("Results and plot saved to {}", report_path.display())
}

/// Estimates to 6 decimals, comma separated.
pub fn format_estimates(estimates: &[f64]) -> String {
    let parts: Vec<String> = estimates.iter().map(|v| format!("{v:.6}")).collect();
    parts.join(", ")
}
