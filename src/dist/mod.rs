//! Discrete distributions: frequency histograms, probability mass functions
//! and cumulative distributions.

pub mod cdf;
pub mod hist;
pub mod pmf;

pub use cdf::Cdf;
pub use hist::Hist;
pub use pmf::Pmf;

use std::cmp::Ordering;

/// A real value that can be used as an ordered map key. Negative zero is
/// folded into positive zero so that both address the same entry.
#[derive(Debug, Clone, Copy)]
pub struct Value(f64);

impl Value {
    pub fn new(v: f64) -> Self {
        Self(v + 0.0)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Render a horizontal bar chart of (label, weight) rows, scaled so that the
/// largest weight is 40 characters wide.
pub(crate) fn render_bars<I: IntoIterator<Item = (f64, f64)>>(rows: I) -> String {
    let rows: Vec<(f64, f64)> = rows.into_iter().collect();
    let max = rows.iter().fold(0.0_f64, |m, r| m.max(r.1));

    if max <= 0.0 {
        return String::from("-- empty --\n");
    }

    let mut out = String::new();
    for (label, weight) in rows {
        let len = (40.0 * weight / max) as usize;
        out.push_str(&format!("{}) {} - {}\n", label, "#".repeat(len), weight));
    }
    out
}

#[test]
fn test_negative_zero_is_zero() {
    assert_eq!(Value::new(-0.0), Value::new(0.0));
    assert!(Value::new(-1.0) < Value::new(0.0));
    assert!(Value::new(2.5) > Value::new(2.0));
}
