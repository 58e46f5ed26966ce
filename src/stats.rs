//! Summary statistics over plain samples: moments, least squares fits and
//! the data behind a normal probability plot.

use rand::Rng;
use rand_distr::StandardNormal;

/// Returns the arithmetic mean of 'xs', or zero for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Returns the population variance of 'xs'.
pub fn var(xs: &[f64]) -> f64 {
    let mu = mean(xs);
    mean(&xs.iter().map(|x| (x - mu) * (x - mu)).collect::<Vec<_>>())
}

/// Returns the population covariance of two equally long samples.
pub fn cov(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    let (mx, my) = (mean(&xs[..n]), mean(&ys[..n]));
    let total: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    total / n as f64
}

/// Fit 'ys = inter + slope * xs' and return (inter, slope). A sample with no
/// spread in 'xs' has no slope; the fit is then flat through the mean.
pub fn least_squares(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    let vx = var(xs);
    let slope = if vx > 0.0 { cov(xs, ys) / vx } else { 0.0 };
    let inter = mean(ys) - slope * mean(xs);
    (inter, slope)
}

/// How much a predictor with correlation 'r' reduces the prediction error of
/// a quantity with standard deviation 'sigma'.
#[derive(Debug, Clone, Copy)]
pub struct RmseSummary {
    pub r: f64,
    pub r2: f64,
    pub rmse_without: f64,
    pub rmse_with: f64,
    pub reduction: f64,
}

pub fn summarize_r(r: f64, sigma: f64) -> RmseSummary {
    let r2 = r * r;
    let rmse_without = sigma;
    let rmse_with = (sigma * sigma * (1.0 - r2)).sqrt();
    RmseSummary {
        r,
        r2,
        rmse_without,
        rmse_with,
        reduction: 1.0 - rmse_with / rmse_without,
    }
}

/// Sorted standard normal variates paired with a sorted sample, and the
/// least squares line through them.
#[derive(Debug, Clone)]
pub struct NormalPlot {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub inter: f64,
    pub slope: f64,
}

impl NormalPlot {
    /// Pair the sorted sample 'ys' with as many sorted draws from the
    /// standard normal distribution.
    pub fn new<R: Rng>(ys: &[f64], rng: &mut R) -> Self {
        let mut ys = ys.to_vec();
        ys.sort_by(f64::total_cmp);

        let mut xs: Vec<f64> = (0..ys.len())
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();
        xs.sort_by(f64::total_cmp);

        let (inter, slope) = least_squares(&xs, &ys);
        Self {
            xs,
            ys,
            inter,
            slope,
        }
    }

    /// The endpoints of the fitted line over 'x_range'.
    pub fn fit_line(&self, x_range: (f64, f64)) -> [(f64, f64); 2] {
        [
            (x_range.0, self.inter + self.slope * x_range.0),
            (x_range.1, self.inter + self.slope * x_range.1),
        ]
    }
}

#[test]
fn test_least_squares_exact_line() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let ys: Vec<f64> = xs.iter().map(|x| 3.0 + 2.0 * x).collect();
    let (inter, slope) = least_squares(&xs, &ys);
    assert!((inter - 3.0).abs() < 1e-12);
    assert!((slope - 2.0).abs() < 1e-12);
}
