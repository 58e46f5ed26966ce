//! A probability mass function over real values.

use super::{render_bars, Cdf, Hist, Value};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Maps values to probability mass. Iteration is in ascending value order.
#[derive(Debug, Clone, Default)]
pub struct Pmf {
    probs: BTreeMap<Value, f64>,
}

impl Pmf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a normalized Pmf from the counts in 'hist'.
    pub fn from_hist(hist: &Hist) -> Result<Self> {
        let mut pmf = Pmf::new();
        for (val, count) in hist.items() {
            pmf.set(val, count as f64);
        }
        pmf.normalize()?;
        Ok(pmf)
    }

    /// Build a Pmf from (value, prob) pairs without normalizing. Repeated
    /// values accumulate.
    pub fn from_items<I: IntoIterator<Item = (f64, f64)>>(items: I) -> Self {
        let mut pmf = Pmf::new();
        for (val, prob) in items {
            pmf.incr(val, prob);
        }
        pmf
    }

    pub fn set(&mut self, val: f64, prob: f64) {
        self.probs.insert(Value::new(val), prob);
    }

    /// Add 'prob' to the mass of 'val'.
    pub fn incr(&mut self, val: f64, prob: f64) {
        *self.probs.entry(Value::new(val)).or_insert(0.0) += prob;
    }

    /// Scale the mass of 'val' by 'factor'. Missing values stay missing.
    pub fn mult(&mut self, val: f64, factor: f64) {
        if let Some(p) = self.probs.get_mut(&Value::new(val)) {
            *p *= factor;
        }
    }

    /// Returns the mass of 'val', or zero.
    pub fn prob(&self, val: f64) -> f64 {
        self.probs.get(&Value::new(val)).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Scale the masses so that they sum to one. Returns the total before
    /// normalization. A total that is NaN or infinite means some mass was
    /// not a valid probability.
    pub fn normalize(&mut self) -> Result<f64> {
        let total = self.total();
        if !total.is_finite() {
            return Err(Error::Degenerate(format!("total mass is {}", total)));
        }
        if total <= 0.0 {
            return Err(Error::EmptyDistribution);
        }
        for p in self.probs.values_mut() {
            *p /= total;
        }
        Ok(total)
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Iterate over (value, prob) in ascending value order.
    pub fn items(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.probs.iter().map(|(v, p)| (v.get(), *p))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.probs.keys().map(|v| v.get())
    }

    /// Returns the largest value in the support.
    pub fn max_value(&self) -> Option<f64> {
        self.probs.keys().next_back().map(|v| v.get())
    }

    /// Returns the smallest value in the support.
    pub fn min_value(&self) -> Option<f64> {
        self.probs.keys().next().map(|v| v.get())
    }

    /// The mean of a normalized Pmf.
    pub fn mean(&self) -> f64 {
        self.items().map(|(v, p)| v * p).sum()
    }

    /// The variance of a normalized Pmf.
    pub fn var(&self) -> f64 {
        let mu = self.mean();
        self.items().map(|(v, p)| p * (v - mu) * (v - mu)).sum()
    }

    /// Make a cumulative distribution with the label 'name'.
    pub fn make_cdf(&self, name: &str) -> Cdf {
        Cdf::from_pmf(self, name)
    }

    /// Render the masses as text bars.
    pub fn dump(&self) -> String {
        render_bars(self.items())
    }
}
