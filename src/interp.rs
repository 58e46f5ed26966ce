//! A piecewise-linear lookup table that maps raw scores to scaled scores and
//! back.

use crate::error::{Error, Result};

/// Two parallel ascending sequences. 'lookup' maps from 'xs' to 'ys' and
/// 'reverse' maps from 'ys' to 'xs'.
#[derive(Debug, Clone)]
pub struct Interpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Interpolator {
    /// Creates a new table. Both sequences must be sorted ascending, have the
    /// same length and contain at least two points.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::Interpolator(format!(
                "{} xs but {} ys",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(Error::Interpolator(format!(
                "need at least two points, got {}",
                xs.len()
            )));
        }
        Ok(Self { xs, ys })
    }

    /// Builds a monotone table from (raw, scaled) pairs. Each column is
    /// sorted on its own.
    pub fn from_pairs(pairs: &[(i64, f64)]) -> Result<Self> {
        let mut xs: Vec<f64> = pairs.iter().map(|p| p.0 as f64).collect();
        let mut ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        xs.sort_by(f64::total_cmp);
        ys.sort_by(f64::total_cmp);
        Self::new(xs, ys)
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the y that corresponds to 'x'.
    pub fn lookup(&self, x: f64) -> f64 {
        bisect(x, &self.xs, &self.ys)
    }

    /// Returns the x that corresponds to 'y'.
    pub fn reverse(&self, y: f64) -> f64 {
        bisect(y, &self.ys, &self.xs)
    }
}

/// Interpolate 'x' on the table (xs, ys). Values outside the table are
/// extrapolated along the nearest segment.
fn bisect(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let last = xs.len() - 1;
    if x == xs[0] {
        return ys[0];
    }
    if x == xs[last] {
        return ys[last];
    }

    // Pick the segment [i-1, i] that contains 'x', or the boundary segment.
    let i = xs.partition_point(|&v| v <= x).clamp(1, last);

    let dx = xs[i] - xs[i - 1];
    if dx == 0.0 {
        // A flat boundary segment has no slope to extrapolate with.
        return if x < xs[0] { ys[0] } else { ys[last] };
    }
    let frac = (x - xs[i - 1]) / dx;
    ys[i - 1] + frac * (ys[i] - ys[i - 1])
}

#[test]
fn test_bisect_inside_and_outside() {
    let xs = [0.0, 10.0, 20.0];
    let ys = [200.0, 400.0, 800.0];
    assert_eq!(bisect(5.0, &xs, &ys), 300.0);
    assert_eq!(bisect(15.0, &xs, &ys), 600.0);
    assert_eq!(bisect(20.0, &xs, &ys), 800.0);
    // Extrapolate with the slope of the nearest segment.
    assert_eq!(bisect(-5.0, &xs, &ys), 100.0);
    assert_eq!(bisect(25.0, &xs, &ys), 1000.0);
}
