use satstats::dist::Pmf;
use satstats::interp::Interpolator;
use satstats::transform::{
    apply_logistic, apply_logit, divide_values, logistic, logit, reverse_scale, sample_pmf,
    shift_values, LogisticParams,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_reverse_scale() {
    let scale = Interpolator::new(vec![0.0, 10.0, 20.0], vec![200.0, 400.0, 800.0]).unwrap();
    let pmf = Pmf::from_items([(300.0, 0.25), (400.0, 0.25), (600.0, 0.5)]);
    let raw = reverse_scale(&pmf, &scale);
    assert_eq!(raw.prob(5.0), 0.25);
    assert_eq!(raw.prob(10.0), 0.25);
    assert_eq!(raw.prob(15.0), 0.5);
}

#[test]
fn test_colliding_values_add() {
    // Both scaled scores are below the table, next to a flat segment.
    let scale = Interpolator::new(vec![0.0, 0.0, 10.0], vec![200.0, 200.0, 400.0]).unwrap();
    let pmf = Pmf::from_items([(150.0, 0.25), (180.0, 0.25), (400.0, 0.5)]);
    let raw = reverse_scale(&pmf, &scale);
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.prob(0.0), 0.5);
    assert_eq!(raw.prob(10.0), 0.5);
}

#[test]
fn test_shift_values() {
    let pmf = Pmf::from_items([(-2.0, 0.2), (3.0, 0.3), (5.0, 0.5)]);
    let shifted = shift_values(&pmf, 3.0);
    assert_eq!(shifted.len(), 2);
    assert_eq!(shifted.prob(0.0), 0.3);
    assert_eq!(shifted.prob(2.0), 0.5);

    let unchanged = shift_values(&pmf, 0.0);
    assert_eq!(unchanged.len(), 2);
    assert_eq!(unchanged.prob(-2.0), 0.0);
}

#[test]
fn test_divide_values() {
    let pmf = Pmf::from_items([(-1.0, 0.1), (0.0, 0.2), (25.0, 0.3), (50.0, 0.4)]);
    let divided = divide_values(&pmf, 50.0);
    assert_eq!(divided.len(), 3);
    assert_eq!(divided.prob(0.0), 0.2);
    assert_eq!(divided.prob(0.5), 0.3);
    assert_eq!(divided.prob(1.0), 0.4);
}

#[test]
fn test_apply_logit_excludes_bounds() {
    let pmf = Pmf::from_items([
        (-3.0, 0.1),
        (0.0, 0.1),
        (10.0, 0.2),
        (25.0, 0.2),
        (40.0, 0.2),
        (50.0, 0.1),
        (60.0, 0.1),
    ]);
    let log_odds = apply_logit(&pmf, 50.0);
    assert_eq!(log_odds.len(), 3);
    assert!(log_odds.values().all(|v| v.is_finite()));
    assert_eq!(log_odds.prob(0.0), 0.2);
    // 40/50 has odds of 4.
    assert!(close(log_odds.max_value().unwrap(), 4.0_f64.log10()));
    assert!(close(log_odds.min_value().unwrap(), -(4.0_f64.log10())));
}

#[test]
fn test_logit_and_logistic() {
    assert_eq!(logit(0.5), 0.0);
    assert!(close(logit(0.9), 9.0_f64.log10()));
    assert_eq!(logistic(0.0), 0.5);
    assert!(close(logistic(3.0) + logistic(-3.0), 1.0));
}

#[test]
fn test_apply_logistic_keeps_values() {
    let pmf = Pmf::from_items([(400.0, 0.25), (500.0, 0.5), (600.0, 0.25)]);
    let admitted = apply_logistic(&pmf, LogisticParams::default()).unwrap();

    let before: Vec<f64> = pmf.values().collect();
    let after: Vec<f64> = admitted.values().collect();
    assert_eq!(before, after);
    assert!(close(admitted.total(), 1.0));

    // Admission favors high scores.
    assert!(admitted.mean() > pmf.mean());
    assert!(admitted.prob(600.0) > pmf.prob(600.0));
    assert!(admitted.prob(400.0) < pmf.prob(400.0));
}

#[test]
fn test_apply_logistic_degenerate() {
    let pmf = Pmf::from_items([(500.0, 1.0)]);
    assert!(apply_logistic(&pmf, LogisticParams::default()).is_err());
}

#[test]
fn test_sample_pmf() {
    let pmf = Pmf::from_items([(1.0, 0.25), (2.0, 0.5), (3.0, 0.25)]);
    // 2.5 copies of 1.0 and 3.0 round down to 2.
    let sample = sample_pmf(&pmf, 1000, 0.01);
    assert_eq!(sample.len(), 9);
    assert_eq!(sample.iter().filter(|&&v| v == 2.0).count(), 5);
    assert!(sample_pmf(&pmf, 10, 0.01).is_empty());
}
