//! Pairwise comparison of two independent discrete distributions.

use crate::dist::Pmf;

/// Sum p1 * p2 over all pairs of values (v1, v2) that satisfy 'pred'.
fn joint_mass<F: Fn(f64, f64) -> bool>(pmf1: &Pmf, pmf2: &Pmf, pred: F) -> f64 {
    let mut total = 0.0;
    for (v1, p1) in pmf1.items() {
        for (v2, p2) in pmf2.items() {
            if pred(v1, v2) {
                total += p1 * p2;
            }
        }
    }
    total
}

/// Returns P(X > Y) where X ~ 'pmf1' and Y ~ 'pmf2'.
pub fn prob_bigger(pmf1: &Pmf, pmf2: &Pmf) -> f64 {
    joint_mass(pmf1, pmf2, |v1, v2| v1 > v2)
}

/// Returns P(X < Y).
pub fn prob_less(pmf1: &Pmf, pmf2: &Pmf) -> f64 {
    joint_mass(pmf1, pmf2, |v1, v2| v1 < v2)
}

/// Returns P(X == Y).
pub fn prob_equal(pmf1: &Pmf, pmf2: &Pmf) -> f64 {
    joint_mass(pmf1, pmf2, |v1, v2| v1 == v2)
}
