//! The tabular report written to the workbook.

use crate::domain::ExperimentResult;
use crate::report::format::format_estimates;

pub const REPORT_HEADERS: [&str; 4] = ["Total Points", "Mean of π", "Mode of π", "All Estimates"];

/// Extra character widths added to the longest cell of each column.
pub const COLUMN_PADDING: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub sample_size: u64,
    pub mean: f64,
    pub mode: f64,
    /// Estimates to 6 decimals, joined with `", "`.
    pub estimates: String,
}

impl ReportRow {
    /// Cell text as it is rendered in the sheet, in column order.
    pub fn rendered_cells(&self) -> [String; 4] {
        [
            self.sample_size.to_string(),
            self.mean.to_string(),
            self.mode.to_string(),
            self.estimates.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn from_results(results: &[ExperimentResult]) -> Self {
        let rows = results
            .iter()
            .map(|r| ReportRow {
                sample_size: r.sample_size,
                mean: r.mean,
                mode: r.mode,
                estimates: format_estimates(&r.estimates),
            })
            .collect();
        Self { rows }
    }

    pub fn headers(&self) -> &'static [&'static str; 4] {
        &REPORT_HEADERS
    }

    /// Column widths in characters: longest rendered cell (header included) plus padding.
    pub fn column_widths(&self) -> [usize; 4] {
        let mut widths = REPORT_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row.rendered_cells()) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths.map(|w| w + COLUMN_PADDING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(sample_size: u64, estimates: Vec<f64>) -> ExperimentResult {
        let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
        ExperimentResult {
            sample_size,
            mode: estimates[0],
            estimates,
            mean,
        }
    }

    #[test]
    fn one_row_per_result_with_formatted_estimates() {
        let iterations = 10;
        let results: Vec<ExperimentResult> = [1_000u64, 10_000, 100_000, 1_000_000]
            .iter()
            .map(|&n| result(n, (0..iterations).map(|i| 3.1 + i as f64 * 0.01).collect()))
            .collect();

        let table = ReportTable::from_results(&results);
        assert_eq!(table.headers().len(), 4);
        assert_eq!(table.rows.len(), 4);

        for row in &table.rows {
            let parts: Vec<&str> = row.estimates.split(", ").collect();
            assert_eq!(parts.len(), iterations);
            for p in parts {
                let (_, decimals) = p.split_once('.').unwrap();
                assert_eq!(decimals.len(), 6, "{p}");
            }
        }
        assert!(table.rows[0].estimates.starts_with("3.100000, 3.110000, "));
    }

    #[test]
    fn widths_use_longest_cell_plus_padding() {
        let table = ReportTable::from_results(&[result(1_000, vec![3.16]), result(1_000_000, vec![3.1416])]);
        let widths = table.column_widths();
        // "Total Points" (12) beats "1000000" (7).
        assert_eq!(widths[0], 12 + COLUMN_PADDING);
        // "Mean of π" is 9 characters.
        assert_eq!(widths[1], 9 + COLUMN_PADDING);
        // "All Estimates" (13) beats "3.141600" (8).
        assert_eq!(widths[3], 13 + COLUMN_PADDING);
    }

    #[test]
    fn long_estimate_lists_widen_their_column() {
        let table = ReportTable::from_results(&[result(1_000, vec![3.1; 10])]);
        let expected = table.rows[0].estimates.chars().count() + COLUMN_PADDING;
        assert_eq!(table.column_widths()[3], expected);
        // 10 values of 8 chars joined by 9 separators of 2 chars.
        assert_eq!(expected, 10 * 8 + 9 * 2 + COLUMN_PADDING);
    }
}
