//! A histogram that counts occurrences of values and can display them.

use super::{render_bars, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Hist {
    counts: BTreeMap<Value, u64>,
}

impl Hist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram from (value, count) pairs. A value that appears
    /// more than once keeps the last count.
    pub fn from_pairs(pairs: &[(i64, u64)]) -> Self {
        let mut hist = Hist::new();
        for &(val, count) in pairs {
            hist.set(val as f64, count);
        }
        hist
    }

    /// Build a histogram by counting each value in 'values'.
    pub fn from_values(values: &[f64]) -> Self {
        let mut hist = Hist::new();
        for &val in values {
            hist.incr(val, 1);
        }
        hist
    }

    pub fn set(&mut self, val: f64, count: u64) {
        self.counts.insert(Value::new(val), count);
    }

    pub fn incr(&mut self, val: f64, count: u64) {
        *self.counts.entry(Value::new(val)).or_insert(0) += count;
    }

    /// Returns the count for 'val', or zero.
    pub fn freq(&self, val: f64) -> u64 {
        self.counts.get(&Value::new(val)).copied().unwrap_or(0)
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0, |acc, &c| acc.saturating_add(c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (value, count) in ascending value order.
    pub fn items(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.counts.iter().map(|(v, c)| (v.get(), *c))
    }

    /// Render the histogram as text bars.
    pub fn dump(&self) -> String {
        render_bars(self.items().map(|(v, c)| (v, c as f64)))
    }
}
