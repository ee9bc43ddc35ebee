//! Write the report table and convergence chart to an `.xlsx` workbook.

use std::path::Path;

use rust_xlsxwriter::{Format, Image, Workbook, Worksheet, XlsxError};

use crate::error::{AppError, ErrorKind};
use crate::plot::ChartImage;
use crate::report::ReportTable;

pub const SHEET_NAME: &str = "Sheet1";

/// Top-left cell of the embedded chart (zero-based row, column): `E2`.
pub const CHART_ANCHOR: (u32, u16) = (1, 4);

/// Write `table` and `chart` to `path`, replacing any existing file.
pub fn write_workbook(path: &Path, table: &ReportTable, chart: &ChartImage) -> Result<(), AppError> {
    if !chart.is_png() {
        return Err(AppError::new(
            ErrorKind::MissingChartArtifact,
            "No convergence chart to embed; render the chart before exporting the report.",
        ));
    }
    let image = Image::new_from_buffer(&chart.png).map_err(|e| {
        AppError::new(
            ErrorKind::MissingChartArtifact,
            format!("Convergence chart could not be embedded: {e}"),
        )
    })?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    fill_sheet(worksheet, table, &image)
        .map_err(|e| AppError::file_write(format!("Failed to build report sheet: {e}")))?;

    workbook
        .save(path)
        .map_err(|e| AppError::file_write(format!("Failed to write report '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), rows = table.rows.len(), "report written");
    Ok(())
}

fn fill_sheet(worksheet: &mut Worksheet, table: &ReportTable, image: &Image) -> Result<(), XlsxError> {
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, title) in table.headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_number(r, 0, row.sample_size as f64)?;
        worksheet.write_number(r, 1, row.mean)?;
        worksheet.write_number(r, 2, row.mode)?;
        worksheet.write_string(r, 3, row.estimates.as_str())?;
    }

    for (col, width) in table.column_widths().iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    let (row, col) = CHART_ANCHOR;
    worksheet.insert_image(row, col, image)?;
    Ok(())
}
