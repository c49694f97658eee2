use std::error::Error;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::contour::{ContourPoint, ContourSink};

/// Renders the duration contour as a PNG line chart.
#[derive(Clone, Debug)]
pub struct PngContourPlot {
    pub path: PathBuf,
    pub size: (u32, u32),
    pub caption: String,
}

impl PngContourPlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (1200, 700),
            caption: "Simulated VV duration contour".to_string(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

impl ContourSink for PngContourPlot {
    fn render(&mut self, contour: &[ContourPoint]) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }
        render_contour_plot(&self.path, &self.caption, self.size, contour)?;
        info!(path = %self.path.display(), units = contour.len(), "saved contour plot");
        Ok(())
    }
}

fn axis_ranges(contour: &[ContourPoint]) -> ((f64, f64), (f64, f64)) {
    let t_max = contour
        .iter()
        .map(|p| p.time)
        .fold(0.0f64, f64::max)
        .max(1e-3);
    let (mut y_lo, mut y_hi) = contour
        .iter()
        .map(|p| p.duration)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        });
    if !y_lo.is_finite() || !y_hi.is_finite() {
        y_lo = 0.0;
        y_hi = 1.0;
    }
    let pad = ((y_hi - y_lo) * 0.1).max(1e-3);
    ((0.0, t_max * 1.05), (y_lo - pad, y_hi + pad))
}

fn render_contour_plot(
    out_path: &Path,
    caption: &str,
    size: (u32, u32),
    contour: &[ContourPoint],
) -> Result<(), Box<dyn Error>> {
    let ((x_lo, x_hi), (y_lo, y_hi)) = axis_ranges(contour);

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("time (s)")
        .y_desc("duration (s)")
        .draw()?;

    let points: Vec<(f64, f64)> = contour.iter().map(|p| (p.time, p.duration)).collect();
    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
