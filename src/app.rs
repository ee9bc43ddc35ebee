//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - runs the estimation pipeline
//! - prints the results table as each sample size completes

use clap::Parser;

use crate::cli::Cli;
use crate::domain::ExperimentConfig;
use crate::error::AppError;
use crate::report::{format_console_header, format_console_row, format_saved_line};

pub mod pipeline;

/// Entry point for the `mcpi` binary.
pub fn run() -> Result<(), AppError> {
    // A missing `.env` is the normal case.
    dotenvy::dotenv().ok();
    crate::logging::init();

    let cli = Cli::parse();
    let config = config_from_args(&cli);
    config.validate()?;
    tracing::debug!(?config, "configuration resolved");

    println!("{}", format_console_header());
    pipeline::run_pipeline(&config, |result| println!("{}", format_console_row(result)))?;
    println!("{}", format_saved_line(&config.report_path));

    Ok(())
}

pub fn config_from_args(args: &Cli) -> ExperimentConfig {
    ExperimentConfig {
        sample_sizes: args.sample_sizes.clone(),
        iterations: args.iterations,
        seed: args.seed,
        mode_policy: args.mode_policy,
        report_path: args.report.clone(),
        chart_path: args.chart.clone(),
        export_json: args.export_json.clone(),
        chart_width: args.chart_width,
        chart_height: args.chart_height,
    }
}
