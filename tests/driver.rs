use satstats::driver::{run, AnalysisConfig, Timer};
use satstats::reader::{RANKS_FILE, SCALE_FILE, SCORES_FILE};
use std::fmt::Write as _;
use std::path::Path;

/// A math scale where raw score r maps to 200 + 10r, for r in 0..=60, and
/// bell-shaped rank tables around 500.
fn write_fixtures(dir: &Path) {
    let mut scale = String::from("Raw,Reading,Raw,Math,Raw,Writing\n");
    for r in (0..=60).rev() {
        let s = 200 + 10 * r;
        writeln!(scale, "{r},{s},{r},{s}-{s},{r},{s}").unwrap();
    }
    std::fs::write(dir.join(SCALE_FILE), scale).unwrap();

    let mut ranks = String::from("Score,Number\n");
    let mut scores = String::new();
    for s in (200..=800).step_by(10) {
        let z = (s as f64 - 500.0) / 100.0;
        let count = (1000.0 * (-z * z / 2.0).exp()) as u64 + 1;
        writeln!(ranks, "{s},{count}").unwrap();
        writeln!(scores, "{s},{count}").unwrap();
    }
    scores.push_str("Total,100000,\n");
    std::fs::write(dir.join(RANKS_FILE), ranks).unwrap();
    std::fs::write(dir.join(SCORES_FILE), scores).unwrap();
}

#[test]
fn test_full_analysis() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_fixtures(data.path());

    let config = AnalysisConfig {
        data_dir: data.path().to_path_buf(),
        out_dir: Some(out.path().join("plots")),
        infer_logit: true,
        ..Default::default()
    };
    let report = run(&config).unwrap();

    assert_eq!(report.scale_skipped, 1);
    assert_eq!(report.ranks_skipped, 1);
    assert!(report.total > 20_000);
    assert_eq!(report.max_score, 60.0);
    assert!((report.raw_mean - 30.0).abs() < 1e-6);

    assert!((report.posterior_low.total() - 1.0).abs() < 1e-9);
    assert!(report.posterior_high.mean() > report.posterior_low.mean());
    assert!(report.prob_bigger > 0.5 && report.prob_bigger <= 1.0);

    let admissions = report.admissions.unwrap();
    let (q1, q2, q3) = admissions.quartiles;
    assert!(q1 <= q2 && q2 <= q3);
    assert!(q2 > 500.0);
    assert_eq!(admissions.scores_skipped, 1);

    assert_eq!(report.plots.len(), 5);
    for path in &report.plots {
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"), "{}", path.display());
    }
}

#[test]
fn test_analysis_without_plots() {
    let data = tempfile::tempdir().unwrap();
    write_fixtures(data.path());

    let config = AnalysisConfig {
        data_dir: data.path().to_path_buf(),
        ..Default::default()
    };
    let report = run(&config).unwrap();
    assert!(report.plots.is_empty());
    assert!(report.admissions.is_none());

    // The same seed gives the same normal plot.
    let again = run(&config).unwrap();
    assert_eq!(report.normal_fit, again.normal_fit);
    assert_eq!(report.prob_bigger, again.prob_bigger);
}

#[test]
fn test_shift_moves_the_prior() {
    let data = tempfile::tempdir().unwrap();
    write_fixtures(data.path());

    let config = AnalysisConfig {
        data_dir: data.path().to_path_buf(),
        shift: 10.0,
        ..Default::default()
    };
    let report = run(&config).unwrap();
    assert_eq!(report.max_score, 50.0);
}

#[test]
fn test_missing_data_is_fatal() {
    let data = tempfile::tempdir().unwrap();
    let config = AnalysisConfig {
        data_dir: data.path().to_path_buf(),
        ..Default::default()
    };
    assert!(matches!(run(&config), Err(satstats::Error::Io { .. })));
}

#[test]
fn test_score_above_the_scale_is_fatal() {
    let data = tempfile::tempdir().unwrap();
    write_fixtures(data.path());

    // The higher score, 830, is above the top of the scale.
    let config = AnalysisConfig {
        data_dir: data.path().to_path_buf(),
        low: 780.0,
        step: 50.0,
        ..Default::default()
    };
    assert!(matches!(run(&config), Err(satstats::Error::Degenerate(_))));
}

#[test]
fn test_shift_past_every_score_is_fatal() {
    let data = tempfile::tempdir().unwrap();
    write_fixtures(data.path());

    let config = AnalysisConfig {
        data_dir: data.path().to_path_buf(),
        shift: 60.0,
        ..Default::default()
    };
    assert!(matches!(run(&config), Err(satstats::Error::Degenerate(_))));
}

#[test]
fn test_timer_elapsed_grows() {
    let timer = Timer::new("Sleeping");
    let before = timer.elapsed();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(timer.elapsed() >= before + std::time::Duration::from_millis(5));
}
