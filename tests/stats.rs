use rand::SeedableRng;
use satstats::stats::{cov, least_squares, mean, summarize_r, var, NormalPlot};

#[test]
fn test_moments() {
    let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(mean(&xs), 5.0);
    assert_eq!(var(&xs), 4.0);
    assert_eq!(cov(&xs, &xs), 4.0);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn test_least_squares_flat() {
    let (inter, slope) = least_squares(&[1.0, 1.0], &[2.0, 4.0]);
    assert_eq!(slope, 0.0);
    assert_eq!(inter, 3.0);
}

#[test]
fn test_summarize_r() {
    let s = summarize_r(0.53, 0.71);
    assert!((s.r2 - 0.2809).abs() < 1e-12);
    let expected = (0.71_f64 * 0.71 * (1.0 - 0.2809)).sqrt();
    assert!((s.rmse_with - expected).abs() < 1e-12);
    assert!((s.reduction - (1.0 - expected / 0.71)).abs() < 1e-12);
    assert!(s.reduction > 0.15 && s.reduction < 0.16);
}

#[test]
fn test_normal_plot_of_normal_sample() {
    use rand_distr::{Distribution, Normal};

    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    let normal = Normal::new(30.0, 8.0).unwrap();
    let sample: Vec<f64> = (0..5000).map(|_| normal.sample(&mut rng)).collect();

    let plot = NormalPlot::new(&sample, &mut rng);
    assert_eq!(plot.xs.len(), sample.len());
    assert!(plot.ys.windows(2).all(|w| w[0] <= w[1]));
    assert!(plot.xs.windows(2).all(|w| w[0] <= w[1]));
    // A normal sample falls on a line with the mean as intercept and the
    // standard deviation as slope.
    assert!((plot.inter - 30.0).abs() < 1.0);
    assert!((plot.slope - 8.0).abs() < 1.0);

    let [(x0, _), (x1, y1)] = plot.fit_line((-4.0, 4.0));
    assert_eq!((x0, x1), (-4.0, 4.0));
    assert!((y1 - (plot.inter + 4.0 * plot.slope)).abs() < 1e-12);
}
