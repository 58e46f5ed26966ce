//! Transformations that map one Pmf to a new one.
//!
//! Every transformer walks the (value, prob) pairs of its input, computes a
//! new value and accumulates the mass onto it in a fresh Pmf. When two input
//! values map to the same output value their masses add up.

use crate::dist::Pmf;
use crate::error::{Error, Result};
use crate::interp::Interpolator;

/// Build a new Pmf by mapping each value with 'f'. Values for which 'f'
/// returns None are dropped.
fn map_values<F: Fn(f64) -> Option<f64>>(pmf: &Pmf, f: F) -> Pmf {
    let mut new = Pmf::new();
    for (val, prob) in pmf.items() {
        if let Some(x) = f(val) {
            new.incr(x, prob);
        }
    }
    new
}

/// Convert a distribution over scaled scores into raw scores.
pub fn reverse_scale(pmf: &Pmf, scale: &Interpolator) -> Pmf {
    map_values(pmf, |val| Some(scale.reverse(val)))
}

/// Subtract 'shift' from every value. Values below 'shift' are dropped.
pub fn shift_values(pmf: &Pmf, shift: f64) -> Pmf {
    map_values(pmf, |val| (val >= shift).then(|| val - shift))
}

/// Divide every value by 'denom'. Negative values are dropped.
pub fn divide_values(pmf: &Pmf, denom: f64) -> Pmf {
    map_values(pmf, |val| (val >= 0.0).then(|| val / denom))
}

/// Map every value into log-odds space, treating 'val / denom' as a
/// probability. Only values strictly between 0 and 'denom' are kept.
pub fn apply_logit(pmf: &Pmf, denom: f64) -> Pmf {
    map_values(pmf, |val| (val > 0.0 && val < denom).then(|| logit(val / denom)))
}

/// Parameters of the logistic admission model.
#[derive(Debug, Clone, Copy)]
pub struct LogisticParams {
    pub inter: f64,
    pub slope: f64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self {
            inter: -2.5,
            slope: 10.0,
        }
    }
}

/// Weight each value by the probability of admission under a logistic
/// model of its standard score, and renormalize. The values themselves are
/// unchanged.
pub fn apply_logistic(pmf: &Pmf, params: LogisticParams) -> Result<Pmf> {
    let (mu, sigma) = summarize(pmf);
    if sigma == 0.0 || !sigma.is_finite() {
        return Err(Error::Degenerate(format!(
            "standard deviation is {sigma}"
        )));
    }

    let mut new = Pmf::new();
    for (val, prob) in pmf.items() {
        let z = params.inter + params.slope * standard_score(val, mu, sigma);
        let prob_admit = logistic(z);
        new.incr(val, prob * prob_admit);
        log::debug!("{} {} {}", val, z, prob_admit);
    }

    new.normalize()?;
    summarize(&new);
    Ok(new)
}

/// Print and return the mean and standard deviation of 'pmf'.
pub fn summarize(pmf: &Pmf) -> (f64, f64) {
    let mu = pmf.mean();
    let sigma = pmf.var().sqrt();
    println!("mu, sigma {} {}", mu, sigma);
    (mu, sigma)
}

/// Expand 'pmf' into a sample of about 'total * fraction' values. Each value
/// is repeated in proportion to its mass, rounding down.
pub fn sample_pmf(pmf: &Pmf, total: u64, fraction: f64) -> Vec<f64> {
    let mut sample = Vec::new();
    for (val, prob) in pmf.items() {
        let n = (prob * total as f64 * fraction) as usize;
        sample.extend(std::iter::repeat(val).take(n));
    }
    sample
}

pub fn standard_score(val: f64, mu: f64, sigma: f64) -> f64 {
    (val - mu) / sigma
}

pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// The base-10 log-odds of 'p'.
pub fn logit(p: f64) -> f64 {
    p.log10() - (1.0 - p).log10()
}
