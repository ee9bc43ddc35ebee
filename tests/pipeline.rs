use std::path::Path;

use mc_pi::app::pipeline::{make_rng, run_experiments, run_pipeline, run_pipeline_with_rng};
use mc_pi::domain::{ExperimentConfig, ModePolicy};
use mc_pi::error::ErrorKind;
use rand::RngCore;

/// Yields the origin for the first `inside_points` points, then the corner (-1, -1).
struct InsideThenOutside {
    inside_draws: u64,
    drawn: u64,
}

impl InsideThenOutside {
    fn new(inside_points: u64) -> Self {
        Self {
            inside_draws: inside_points * 2,
            drawn: 0,
        }
    }
}

impl RngCore for InsideThenOutside {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = if self.drawn < self.inside_draws { 1 << 63 } else { 0 };
        self.drawn += 1;
        v
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn config_in(dir: &Path, sample_sizes: Vec<u64>, iterations: u32) -> ExperimentConfig {
    ExperimentConfig {
        sample_sizes,
        iterations,
        report_path: dir.join("MonteCarlo_Pi_Estimation.xlsx"),
        chart_path: dir.join("MonteCarlo_Pi_Convergence.png"),
        chart_width: 400,
        chart_height: 300,
        ..ExperimentConfig::default()
    }
}

#[test]
fn single_scripted_run_produces_expected_row_and_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), vec![1_000], 1);

    let mut seen = Vec::new();
    let mut rng = InsideThenOutside::new(790);
    let run = run_pipeline_with_rng(&config, &mut rng, |r| seen.push(r.sample_size)).unwrap();

    assert_eq!(seen, vec![1_000]);
    assert_eq!(run.results.len(), 1);
    let result = &run.results[0];
    assert_eq!(format!("{:.6}", result.mean), "3.160000");
    assert_eq!(format!("{:.6}", result.mode), "3.160000");

    assert_eq!(run.table.rows.len(), 1);
    let row = &run.table.rows[0];
    assert_eq!(row.sample_size, 1_000);
    assert_eq!(row.estimates, "3.160000");

    let png = std::fs::read(&config.chart_path).unwrap();
    assert_eq!(png, run.chart.png);
    assert!(std::fs::read(&config.report_path).unwrap().starts_with(b"PK"));
}

#[test]
fn four_sizes_give_four_rows_and_json_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), vec![100, 1_000, 10_000, 100_000], 3);
    config.seed = Some(2024);
    config.export_json = Some(dir.path().join("results.json"));

    let run = run_pipeline(&config, |_| {}).unwrap();

    assert_eq!(run.table.rows.len(), 4);
    for row in &run.table.rows {
        assert_eq!(row.estimates.split(", ").count(), 3);
    }
    for result in &run.results {
        assert!(result.estimates.iter().all(|e| (0.0..=4.0).contains(e)));
    }

    let json: serde_json::Value =
        serde_json::from_reader(std::fs::File::open(dir.path().join("results.json")).unwrap()).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 4);
    assert_eq!(json["seed"], 2024);
}

#[test]
fn same_seed_gives_identical_results() {
    let config = ExperimentConfig {
        sample_sizes: vec![1_000, 5_000],
        iterations: 4,
        ..ExperimentConfig::default()
    };
    let a = run_experiments(&config, &mut make_rng(Some(11)), |_| {}).unwrap();
    let b = run_experiments(&config, &mut make_rng(Some(11)), |_| {}).unwrap();
    assert_eq!(a, b);
}

#[test]
fn larger_samples_converge_on_average() {
    let config = ExperimentConfig {
        sample_sizes: vec![500, 200_000],
        iterations: 5,
        mode_policy: ModePolicy::FirstEncountered,
        ..ExperimentConfig::default()
    };

    let (mut small_err, mut large_err) = (0.0, 0.0);
    for seed in 0..5 {
        let results = run_experiments(&config, &mut make_rng(Some(seed)), |_| {}).unwrap();
        small_err += results[0].abs_error();
        large_err += results[1].abs_error();
    }
    assert!(large_err < small_err, "large {large_err} vs small {small_err}");
}

#[test]
fn invalid_config_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), vec![1_000, 0], 2);

    let err = run_pipeline(&config, |_| {}).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    assert!(!config.chart_path.exists());
    assert!(!config.report_path.exists());
}

#[test]
fn unwritable_chart_path_aborts_before_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), vec![100], 1);
    config.seed = Some(1);
    config.chart_path = dir.path().join("missing").join("chart.png");

    let err = run_pipeline(&config, |_| {}).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileWrite);
    assert!(!config.report_path.exists());
}
