//! The estimation pipeline shared by the binary and the integration tests.
//!
//! simulate -> aggregate -> plot -> export
//!
//! Front-ends only decide how to present each finished experiment.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{ExperimentConfig, ExperimentResult};
use crate::error::AppError;
use crate::plot::{ChartImage, ChartStyle, convergence_points, render_convergence_chart};
use crate::report::ReportTable;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub results: Vec<ExperimentResult>,
    pub chart: ChartImage,
    pub table: ReportTable,
}

/// Seeded generator when `seed` is set, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run every configured sample size, calling `on_result` as each one finishes.
pub fn run_experiments<R, F>(
    config: &ExperimentConfig,
    rng: &mut R,
    mut on_result: F,
) -> Result<Vec<ExperimentResult>, AppError>
where
    R: Rng + ?Sized,
    F: FnMut(&ExperimentResult),
{
    config.validate()?;

    let mut results = Vec::with_capacity(config.sample_sizes.len());
    for size_config in config.sample_configs() {
        let started = Instant::now();
        let estimates = crate::sim::run_experiment(rng, &size_config)?;
        let result = crate::stats::summarize(size_config.points, estimates, config.mode_policy)?;

        tracing::info!(
            points = size_config.points,
            iterations = size_config.iterations,
            mean = result.mean,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "experiment finished"
        );
        on_result(&result);
        results.push(result);
    }
    Ok(results)
}

/// Execute the full pipeline with a generator built from `config.seed`.
pub fn run_pipeline<F>(config: &ExperimentConfig, on_result: F) -> Result<RunOutput, AppError>
where
    F: FnMut(&ExperimentResult),
{
    let mut rng = make_rng(config.seed);
    run_pipeline_with_rng(config, &mut rng, on_result)
}

/// Execute the full pipeline with a caller-supplied generator.
pub fn run_pipeline_with_rng<R, F>(config: &ExperimentConfig, rng: &mut R, on_result: F) -> Result<RunOutput, AppError>
where
    R: Rng + ?Sized,
    F: FnMut(&ExperimentResult),
{
    // 1) Simulate + aggregate.
    let results = run_experiments(config, rng, on_result)?;

    // 2) Render the chart and persist it.
    let style = ChartStyle {
        width: config.chart_width,
        height: config.chart_height,
    };
    let chart = render_convergence_chart(&convergence_points(&results), style)?;
    chart.write_png(&config.chart_path)?;

    // 3) Build the report and embed the in-memory chart.
    let table = ReportTable::from_results(&results);
    crate::io::write_workbook(&config.report_path, &table, &chart)?;

    // 4) Optional JSON export.
    if let Some(path) = &config.export_json {
        crate::io::write_results_json(path, &results, config)?;
    }

    Ok(RunOutput { results, chart, table })
}
