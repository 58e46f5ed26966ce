//! Bayesian updates of a prior distribution over a success probability.

use crate::dist::Pmf;
use crate::error::{Error, Result};
use crate::interp::Interpolator;

/// The outcome of a series of binomial trials. The counts are real-valued
/// because they are usually derived from an interpolated raw score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evidence {
    pub successes: f64,
    pub failures: f64,
}

impl Evidence {
    pub fn new(successes: u32, failures: u32) -> Self {
        Self {
            successes: successes as f64,
            failures: failures as f64,
        }
    }

    /// Evidence for a test with 'max_score' questions of which 'raw' were
    /// answered correctly.
    pub fn from_raw(raw: f64, max_score: f64) -> Self {
        Self {
            successes: raw,
            failures: max_score - raw,
        }
    }
}

/// A trait that defines the interface for updating a prior with evidence.
pub trait Updater {
    type Evidence;

    /// Return the likelihood of 'evidence' under the hypothesis 'hypo'. The
    /// value only needs to be proportional to the true likelihood.
    fn likelihood(&self, evidence: &Self::Evidence, hypo: f64) -> f64;

    /// Return the normalized posterior. The hypotheses are the values of
    /// 'prior'.
    fn update(&self, prior: &Pmf, evidence: &Self::Evidence) -> Result<Pmf> {
        let mut posterior = prior.clone();
        for hypo in prior.values() {
            posterior.mult(hypo, self.likelihood(evidence, hypo));
        }
        posterior.normalize()?;
        Ok(posterior)
    }
}

/// Updates a distribution over the probability of success 'p' with binomial
/// evidence.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinomialBayes;

impl Updater for BinomialBayes {
    type Evidence = Evidence;

    fn likelihood(&self, evidence: &Evidence, hypo: f64) -> f64 {
        hypo.powf(evidence.successes) * (1.0 - hypo).powf(evidence.failures)
    }
}

/// Update 'prior' with the evidence of a scaled test score. The score is
/// converted to a raw score with 'scale', shifted, and treated as
/// 'raw' successes out of 'max_score' trials. Scores that map outside
/// [0, max_score] are rejected.
pub fn update_for_score(
    prior: &Pmf,
    score: f64,
    shift: f64,
    max_score: f64,
    scale: &Interpolator,
) -> Result<Pmf> {
    let raw = scale.reverse(score) - shift;
    let evidence = Evidence::from_raw(raw, max_score);
    log::debug!(
        "score {} -> evidence ({}, {})",
        score,
        evidence.successes,
        evidence.failures
    );
    if !(evidence.successes >= 0.0 && evidence.failures >= 0.0) {
        return Err(Error::Degenerate(format!(
            "score {} gives raw score {} outside [0, {}]",
            score, raw, max_score
        )));
    }
    BinomialBayes.update(prior, &evidence)
}
