//! Renders CDF overlays and normal probability plots as SVG files.

use crate::dist::Cdf;
use crate::error::{Error, Result};
use crate::stats::NormalPlot;
use plotters::prelude::*;
use std::path::Path;

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

const SIZE: (u32, u32) = (800, 600);

/// Labels and bounds of a single figure.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// [xmin, xmax, ymin, ymax]. Derived from the data when missing.
    pub axis: Option<[f64; 4]>,
}

impl PlotOptions {
    pub fn new(xlabel: &str, ylabel: &str) -> Self {
        Self {
            xlabel: xlabel.to_string(),
            ylabel: ylabel.to_string(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_axis(mut self, axis: [f64; 4]) -> Self {
        self.axis = Some(axis);
        self
    }
}

/// Returns a (min, max) range that covers 'values' and is never empty.
fn span<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 0.5, hi + 0.5);
    }
    (lo, hi)
}

/// Keep the part of a step outline that lies in [x0, x1]. The level that
/// crosses an edge is carried onto that edge.
fn clip_steps(points: &[(f64, f64)], x0: f64, x1: f64) -> Vec<(f64, f64)> {
    let mut clipped = Vec::with_capacity(points.len() + 2);
    let mut level = None;
    for &(x, y) in points {
        if x < x0 {
            level = Some(y);
            continue;
        }
        if let Some(y0) = level.take() {
            clipped.push((x0, y0));
        }
        if x > x1 {
            if let Some(&(_, last)) = clipped.last() {
                clipped.push((x1, last));
            }
            return clipped;
        }
        clipped.push((x, y));
    }
    // Everything is left of the box.
    if let Some(y) = level {
        clipped.extend([(x0, y), (x1, y)]);
    }
    clipped
}

/// Draw the step functions of 'cdfs' into a single figure at 'path'.
pub fn plot_cdfs(cdfs: &[Cdf], opts: &PlotOptions, path: &Path) -> Result<()> {
    draw_cdfs(cdfs, opts, path).map_err(|e| Error::Plot(e.to_string()))?;
    log::info!("Wrote {}.", path.display());
    Ok(())
}

fn draw_cdfs(cdfs: &[Cdf], opts: &PlotOptions, path: &Path) -> DrawResult {
    let [x0, x1, y0, y1] = match opts.axis {
        Some(axis) => axis,
        None => {
            let (x0, x1) = span(cdfs.iter().flat_map(|c| c.xs().iter().copied()));
            [x0, x1, 0.0, 1.0]
        }
    };

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&opts.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(opts.xlabel.as_str())
        .y_desc(opts.ylabel.as_str())
        .draw()?;

    for (i, cdf) in cdfs.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        chart
            .draw_series(LineSeries::new(
                clip_steps(&cdf.render(), x0, x1),
                color.stroke_width(2),
            ))?
            .label(cdf.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draw a normal probability plot: the sample against standard normal
/// variates, with the fitted line over [-4, 4].
pub fn plot_normal(plot: &NormalPlot, opts: &PlotOptions, path: &Path) -> Result<()> {
    draw_normal(plot, opts, path).map_err(|e| Error::Plot(e.to_string()))?;
    log::info!("Wrote {}.", path.display());
    Ok(())
}

fn draw_normal(plot: &NormalPlot, opts: &PlotOptions, path: &Path) -> DrawResult {
    let fit = plot.fit_line((-4.0, 4.0));
    let [x0, x1, y0, y1] = match opts.axis {
        Some(axis) => axis,
        None => {
            let (y0, y1) = span(plot.ys.iter().copied().chain(fit.iter().map(|p| p.1)));
            [-4.0, 4.0, y0, y1]
        }
    };

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&opts.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(opts.xlabel.as_str())
        .y_desc(opts.ylabel.as_str())
        .draw()?;

    chart.draw_series(LineSeries::new(fit, RED.stroke_width(1)))?;
    chart.draw_series(
        plot.xs
            .iter()
            .zip(&plot.ys)
            .map(|(&x, &y)| Circle::new((x, y), 2, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

#[test]
fn test_clip_steps() {
    let steps = [
        (0.3, 0.0),
        (0.3, 0.2),
        (0.6, 0.2),
        (0.6, 0.7),
        (0.9, 0.7),
        (0.9, 1.0),
    ];

    let inside = clip_steps(&steps, 0.5, 1.0);
    assert_eq!(inside[0], (0.5, 0.2));
    assert_eq!(&inside[1..], &steps[2..]);
    assert!(inside.iter().all(|p| p.0 >= 0.5));

    let right = clip_steps(&steps, 0.5, 0.8);
    assert_eq!(right, vec![(0.5, 0.2), (0.6, 0.2), (0.6, 0.7), (0.8, 0.7)]);

    assert_eq!(clip_steps(&steps, 2.0, 3.0), vec![(2.0, 1.0), (3.0, 1.0)]);
    assert_eq!(clip_steps(&steps, 0.0, 1.0), steps.to_vec());
}
