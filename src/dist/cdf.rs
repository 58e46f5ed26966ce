//! Cumulative distribution functions.

use super::Pmf;

/// An immutable cumulative distribution. 'ps[i]' is P(X <= xs[i]).
#[derive(Debug, Clone)]
pub struct Cdf {
    xs: Vec<f64>,
    ps: Vec<f64>,
    name: String,
}

impl Cdf {
    pub fn from_pmf(pmf: &Pmf, name: &str) -> Self {
        let total = pmf.total();
        let mut xs = Vec::with_capacity(pmf.len());
        let mut ps = Vec::with_capacity(pmf.len());

        let mut running = 0.0;
        for (val, prob) in pmf.items() {
            running += prob;
            xs.push(val);
            ps.push(if total > 0.0 { running / total } else { 0.0 });
        }

        Cdf {
            xs,
            ps,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ps(&self) -> &[f64] {
        &self.ps
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns P(X <= x).
    pub fn prob(&self, x: f64) -> f64 {
        let idx = self.xs.partition_point(|&v| v <= x);
        if idx == 0 {
            return 0.0;
        }
        self.ps[idx - 1]
    }

    /// Returns the smallest value whose cumulative probability is at least
    /// 'p'. 'p' is clamped to [0, 1].
    pub fn value(&self, p: f64) -> Option<f64> {
        if self.xs.is_empty() {
            return None;
        }
        let p = p.clamp(0.0, 1.0);
        let idx = self.ps.partition_point(|&q| q < p);
        Some(self.xs[idx.min(self.xs.len() - 1)])
    }

    /// Returns the value at percentile 'p' (0..100).
    pub fn percentile(&self, p: f64) -> Option<f64> {
        self.value(p / 100.0)
    }

    /// Returns the step-function outline of the distribution, suitable for
    /// drawing as a line.
    pub fn render(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(2 * self.xs.len() + 1);
        if let Some(&first) = self.xs.first() {
            points.push((first, 0.0));
        }
        for (i, &p) in self.ps.iter().enumerate() {
            points.push((self.xs[i], p));
            if let Some(&next) = self.xs.get(i + 1) {
                points.push((next, p));
            }
        }
        points
    }
}
