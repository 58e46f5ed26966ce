//! Runs the complete analysis: read the tables, push the score distribution
//! through the transformation pipeline, compare two posteriors and render
//! the figures.

use crate::bayes::update_for_score;
use crate::compare::prob_bigger;
use crate::dist::{Cdf, Hist, Pmf};
use crate::error::{Error, Result};
use crate::interp::Interpolator;
use crate::plot::{plot_cdfs, plot_normal, PlotOptions};
use crate::reader::{self, Section};
use crate::stats::{summarize_r, NormalPlot, RmseSummary};
use crate::transform::{
    apply_logistic, apply_logit, divide_values, reverse_scale, sample_pmf, shift_values,
    LogisticParams,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Everything that parameterizes one run of the analysis.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// The directory that holds the three input tables.
    pub data_dir: PathBuf,
    /// Where to write the figures. No figures are drawn when this is None.
    pub out_dir: Option<PathBuf>,
    pub section: Section,
    /// The lower of the two scaled scores to compare.
    pub low: f64,
    /// The higher score is 'low + step'.
    pub step: f64,
    pub shift: f64,
    /// The fraction of test takers drawn for the normal probability plot.
    pub sample_fraction: f64,
    pub seed: u64,
    /// Correlation and spread used for the RMSE reduction summary.
    pub r: f64,
    pub sigma: f64,
    pub logistic: LogisticParams,
    /// Also run the admissions model on the percentile table.
    pub infer_logit: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            out_dir: None,
            section: Section::Math,
            low: 720.0,
            step: 50.0,
            shift: 0.0,
            sample_fraction: 0.01,
            seed: 17,
            r: 0.53,
            sigma: 0.71,
            logistic: LogisticParams::default(),
            infer_logit: false,
        }
    }
}

/// The result of the admissions model.
#[derive(Debug, Clone)]
pub struct Admissions {
    pub admitted: Pmf,
    pub quartiles: (f64, f64, f64),
    /// Rows of the percentile table that did not parse. Zero unless the
    /// table was read by 'run'.
    pub scores_skipped: usize,
}

/// A scoped timer that logs how long a stage of the analysis took.
pub struct Timer {
    stage: &'static str,
    start: Instant,
}

impl Timer {
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        Instant::now().saturating_duration_since(self.start)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!(
            "{} completed in {:.3} seconds",
            self.stage,
            self.elapsed().as_secs_f32()
        );
    }
}

/// The quantities printed during a run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub rmse: RmseSummary,
    pub scale_skipped: usize,
    pub ranks_skipped: usize,
    pub total: u64,
    pub raw_mean: f64,
    pub raw_var: f64,
    /// Intercept and slope of the normal probability plot.
    pub normal_fit: (f64, f64),
    pub max_score: f64,
    pub logit_mean: f64,
    pub prior_mean: f64,
    pub posterior_low: Pmf,
    pub posterior_high: Pmf,
    pub prob_bigger: f64,
    pub admissions: Option<Admissions>,
    /// The figures that were written.
    pub plots: Vec<PathBuf>,
}

fn print_rmse(summary: &RmseSummary) {
    println!("r, R^2 {} {}", summary.r, summary.r2);
    println!("RMSE (reduction) {} {}", summary.rmse_with, summary.reduction);
}

/// Build a normalized Pmf from the (score, count) rows of a table.
fn pmf_from_rows(rows: &[(i64, u64)]) -> Result<(u64, Pmf)> {
    let hist = Hist::from_pairs(rows);
    let pmf = Pmf::from_hist(&hist)?;
    Ok((hist.total(), pmf))
}

/// Weight the score distribution by the logistic admission model and report
/// the quartiles of the admitted population.
pub fn infer_logit(pmf: &Pmf, params: LogisticParams) -> Result<Admissions> {
    let admitted = apply_logistic(pmf, params)?;
    let cdf = admitted.make_cdf("admitted");
    let quartile = |p| cdf.percentile(p).ok_or(Error::EmptyDistribution);
    let quartiles = (quartile(25.0)?, quartile(50.0)?, quartile(75.0)?);
    println!("quartiles {:?}", quartiles);
    Ok(Admissions {
        admitted,
        quartiles,
        scores_skipped: 0,
    })
}

/// Run the analysis described by 'config'.
pub fn run(config: &AnalysisConfig) -> Result<AnalysisReport> {
    let rmse = summarize_r(config.r, config.sigma);
    print_rmse(&rmse);

    let timer = Timer::new("Reading");
    let scale_table = reader::read_scale(
        &config.data_dir.join(reader::SCALE_FILE),
        config.section,
    )?;
    for (raw, score) in &scale_table.rows {
        println!("{} {}", raw, score);
    }
    let scale = Interpolator::from_pairs(&scale_table.rows)?;
    println!("{:?}", scale.xs());
    println!("{:?}", scale.ys());
    println!("{}", scale.lookup(53.0));
    println!("{}", scale.reverse(800.0));

    let ranks = reader::read_ranks(&config.data_dir.join(reader::RANKS_FILE))?;
    let (total, pmf) = pmf_from_rows(&ranks.rows)?;
    drop(timer);

    let timer = Timer::new("Transforms");

    let raw = reverse_scale(&pmf, &scale);
    let raw_sample = sample_pmf(&raw, total, config.sample_fraction);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = NormalPlot::new(&raw_sample, &mut rng);
    println!("inter, slope {} {}", normal.inter, normal.slope);

    let (raw_mean, raw_var) = (raw.mean(), raw.var());
    println!("raw mean, var {} {}", raw_mean, raw_var);

    let raw = shift_values(&raw, config.shift);
    let max_score = raw.max_value().ok_or(Error::EmptyDistribution)?;
    if max_score <= 0.0 {
        return Err(Error::Degenerate(format!(
            "shift {} leaves no raw scores above zero",
            config.shift
        )));
    }

    let log_odds = apply_logit(&raw, max_score);
    let logit_mean = log_odds.mean() / log_odds.total().max(f64::MIN_POSITIVE);
    println!("log-odds mean {}", logit_mean);

    let prior = divide_values(&raw, max_score);
    let prior_mean = prior.mean() / prior.total().max(f64::MIN_POSITIVE);

    drop(timer);

    let timer = Timer::new("Updates");
    let low = config.low;
    let high = low + config.step;
    let posterior_low = update_for_score(&prior, low, config.shift, max_score, &scale)?;
    let posterior_high = update_for_score(&prior, high, config.shift, max_score, &scale)?;
    println!(
        "posterior means {} {}",
        posterior_low.mean(),
        posterior_high.mean()
    );

    let prob_bigger = prob_bigger(&posterior_high, &posterior_low);
    println!("prob_bigger: {}", prob_bigger);
    drop(timer);

    let admissions = if config.infer_logit {
        let scores = reader::read_scores(&config.data_dir.join(reader::SCORES_FILE))?;
        let (_, score_pmf) = pmf_from_rows(&scores.rows)?;
        let adm = Admissions {
            scores_skipped: scores.skipped,
            ..infer_logit(&score_pmf, config.logistic)?
        };
        Some((score_pmf, adm))
    } else {
        None
    };

    let mut plots = Vec::new();
    if let Some(out_dir) = &config.out_dir {
        let _timer = Timer::new("Plotting");
        std::fs::create_dir_all(out_dir).map_err(|source| Error::Io {
            path: out_dir.clone(),
            source,
        })?;

        let path = out_dir.join("sat_normal.svg");
        let opts = PlotOptions::new("Standard normal values", "Raw scores")
            .with_title(&format!("Raw scores ({})", config.section.name()));
        plot_normal(&normal, &opts, &path)?;
        plots.push(path);

        let opts = PlotOptions::new("score", "CDF");
        plots.push(draw(out_dir, "cdf_scaled.svg", &[pmf.make_cdf("scaled")], &opts)?);
        plots.push(draw(out_dir, "cdf_raw.svg", &[raw.make_cdf("raw")], &opts)?);

        let cdfs = [
            posterior_low.make_cdf(&format!("posterior {}", low)),
            posterior_high.make_cdf(&format!("posterior {}", high)),
        ];
        let opts = PlotOptions::new("P", "CDF").with_axis([0.5, 1.0, 0.0, 1.0]);
        plots.push(draw(out_dir, "cdf_posterior.svg", &cdfs, &opts)?);

        if let Some((score_pmf, adm)) = &admissions {
            let cdfs = [score_pmf.make_cdf("all"), adm.admitted.make_cdf("admitted")];
            let opts = PlotOptions::new("score", "CDF");
            plots.push(draw(out_dir, "cdf_admitted.svg", &cdfs, &opts)?);
        }
    }

    Ok(AnalysisReport {
        rmse,
        scale_skipped: scale_table.skipped,
        ranks_skipped: ranks.skipped,
        total,
        raw_mean,
        raw_var,
        normal_fit: (normal.inter, normal.slope),
        max_score,
        logit_mean,
        prior_mean,
        posterior_low,
        posterior_high,
        prob_bigger,
        admissions: admissions.map(|(_, adm)| adm),
        plots,
    })
}

fn draw(dir: &Path, file: &str, cdfs: &[Cdf], opts: &PlotOptions) -> Result<PathBuf> {
    let path = dir.join(file);
    plot_cdfs(cdfs, opts, &path)?;
    Ok(path)
}
