//! Convergence chart: mean π estimate vs. sample size.
//!
//! The chart is drawn with Plotters into an in-memory RGB buffer and encoded
//! to PNG once. The encoded bytes are both written to disk and handed to the
//! workbook exporter, so the exporter never depends on reading the file back.

use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use crate::domain::{MAX_CHART_DIM, REFERENCE_PI};
use crate::error::{AppError, ErrorKind};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const TITLE: &str = "Monte Carlo Simulation: π Estimation vs. Total Points";
const X_DESC: &str = "Number of Points (Log Scale)";
const Y_DESC: &str = "Estimated π";

/// Number of dash + gap pairs in the reference line.
const REFERENCE_DASHES: usize = 40;

/// Pixel size of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// An encoded PNG chart.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ChartImage {
    /// Write the PNG to `path`, replacing any existing file.
    pub fn write_png(&self, path: &Path) -> Result<(), AppError> {
        std::fs::write(path, &self.png)
            .map_err(|e| AppError::file_write(format!("Failed to write chart '{}': {e}", path.display())))?;
        tracing::info!(path = %path.display(), bytes = self.png.len(), "chart written");
        Ok(())
    }

    pub fn is_png(&self) -> bool {
        self.png.starts_with(&PNG_SIGNATURE)
    }
}

/// Axis ranges derived from the data.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChartBounds {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl ChartBounds {
    fn from_points(points: &[(f64, f64)]) -> Self {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (REFERENCE_PI, REFERENCE_PI);
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        // Half a decade of headroom either side on the log axis.
        let x_pad = 10f64.sqrt();
        let y_pad = 0.15 * (y_max - y_min).max(0.01);

        Self {
            x0: x_min / x_pad,
            x1: x_max * x_pad,
            y0: y_min - y_pad,
            y1: y_max + y_pad,
        }
    }
}

/// Render the convergence chart for `(sample size, mean estimate)` pairs.
pub fn render_convergence_chart(points: &[(u64, f64)], style: ChartStyle) -> Result<ChartImage, AppError> {
    if points.is_empty() {
        return Err(AppError::invalid_config("Cannot render a convergence chart without results."));
    }
    if points.iter().any(|&(n, mean)| n == 0 || !mean.is_finite()) {
        return Err(AppError::invalid_config(
            "Chart points need a sample size >= 1 and a finite mean.",
        ));
    }
    let dims = 1..=MAX_CHART_DIM;
    if !dims.contains(&style.width) || !dims.contains(&style.height) {
        return Err(AppError::invalid_config(format!(
            "Chart dimensions must be between 1 and {MAX_CHART_DIM} pixels."
        )));
    }
    ensure_font()?;

    let series: Vec<(f64, f64)> = points.iter().map(|&(n, mean)| (n as f64, mean)).collect();
    let bounds = ChartBounds::from_points(&series);

    let mut rgb = vec![0u8; style.width as usize * style.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (style.width, style.height)).into_drawing_area();
        draw_chart(&root, &series, bounds)
            .map_err(|e| AppError::new(ErrorKind::Render, format!("Failed to draw convergence chart: {e}")))?;
    }

    let png = encode_png(&rgb, style.width, style.height)?;
    tracing::debug!(
        points = series.len(),
        width = style.width,
        height = style.height,
        bytes = png.len(),
        "convergence chart rendered"
    );

    Ok(ChartImage {
        png,
        width: style.width,
        height: style.height,
    })
}

fn draw_chart(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    series: &[(f64, f64)],
    b: ChartBounds,
) -> Result<(), Box<dyn Error>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((b.x0..b.x1).log_scale(), b.y0..b.y1)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.3}"))
        .label_style(("sans-serif", 14))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()?;

    let data_style = BLUE.stroke_width(2);
    chart
        .draw_series(LineSeries::new(series.iter().copied(), data_style))?
        .label("Estimated π")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], data_style));
    chart.draw_series(series.iter().map(|&p| Circle::new(p, 5, BLUE.filled())))?;

    let reference_style = RED.stroke_width(2);
    chart
        .draw_series(
            reference_dashes(b.x0, b.x1)
                .into_iter()
                .map(|(xa, xb)| PathElement::new(vec![(xa, REFERENCE_PI), (xb, REFERENCE_PI)], reference_style)),
        )?
        .label("True π")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], reference_style));

    chart
        .configure_series_labels()
        .label_font(("sans-serif", 16))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Dash segments spanning `[x0, x1]`, evenly spaced on the log axis.
fn reference_dashes(x0: f64, x1: f64) -> Vec<(f64, f64)> {
    let (l0, l1) = (x0.log10(), x1.log10());
    let step = (l1 - l0) / (2 * REFERENCE_DASHES) as f64;
    (0..REFERENCE_DASHES)
        .map(|i| {
            let start = l0 + step * (2 * i) as f64;
            (10f64.powf(start), 10f64.powf(start + step))
        })
        .collect()
}

fn encode_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AppError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(rgb, width, height, ColorType::Rgb8)
        .map_err(|e| AppError::new(ErrorKind::Render, format!("Failed to encode chart PNG: {e}")))?;
    Ok(png)
}

fn ensure_font() -> Result<(), AppError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED.get_or_init(|| register_font("sans-serif", FontStyle::Normal, FONT_BYTES).is_ok());
    if ok {
        Ok(())
    } else {
        Err(AppError::new(ErrorKind::Render, "Bundled chart font could not be loaded."))
    }
}
