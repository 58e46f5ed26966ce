//! This is the command line tool that loads the SAT tables from a data
//! directory, runs the analysis and writes the figures.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use satstats::driver::{run, AnalysisConfig, Timer};
use satstats::reader::Section;

use std::path::PathBuf;

fn command() -> Command {
    Command::new("CLI")
        .version("1.x")
        .about("Infers the distribution of raw SAT scores from percentile ranks")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory with sat_scale.csv, sat_ranks.csv and SATPercentileRanks2009.csv")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Directory for the SVG figures")
                .value_parser(value_parser!(PathBuf))
                .default_value("plots"),
        )
        .arg(
            Arg::new("no-plots")
                .long("no-plots")
                .help("Skip drawing the figures")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("section")
                .long("section")
                .value_name("section")
                .help("The section of the scale table to use.")
                .value_parser(["reading", "math", "writing"])
                .default_value("math"),
        )
        .arg(
            Arg::new("low")
                .long("low")
                .value_name("SCORE")
                .help("The lower of the two scaled scores to compare")
                .value_parser(value_parser!(f64))
                .default_value("720"),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .value_name("POINTS")
                .help("The distance between the two compared scores")
                .value_parser(value_parser!(f64))
                .default_value("50"),
        )
        .arg(
            Arg::new("shift")
                .long("shift")
                .value_name("POINTS")
                .help("Raw score subtracted before the update")
                .value_parser(value_parser!(f64))
                .default_value("0"),
        )
        .arg(
            Arg::new("fraction")
                .long("fraction")
                .value_name("FRACTION")
                .help("Fraction of test takers sampled for the normal plot")
                .value_parser(value_parser!(f64))
                .default_value("0.01"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the normal variates")
                .value_parser(value_parser!(u64))
                .default_value("17"),
        )
        .arg(
            Arg::new("infer-logit")
                .long("infer-logit")
                .help("Also apply the admissions model to the percentile table")
                .action(ArgAction::SetTrue),
        )
}

fn config_from_args(matches: &clap::ArgMatches) -> AnalysisConfig {
    let get_f64 = |name: &str| matches.get_one::<f64>(name).copied();
    let defaults = AnalysisConfig::default();

    let section = matches
        .get_one::<String>("section")
        .and_then(|s| s.parse::<Section>().ok())
        .unwrap_or(defaults.section);

    let out_dir = if matches.get_flag("no-plots") {
        None
    } else {
        matches.get_one::<PathBuf>("out-dir").cloned()
    };

    AnalysisConfig {
        data_dir: matches
            .get_one::<PathBuf>("data-dir")
            .cloned()
            .unwrap_or(defaults.data_dir),
        out_dir,
        section,
        low: get_f64("low").unwrap_or(defaults.low),
        step: get_f64("step").unwrap_or(defaults.step),
        shift: get_f64("shift").unwrap_or(defaults.shift),
        sample_fraction: get_f64("fraction").unwrap_or(defaults.sample_fraction),
        seed: matches.get_one::<u64>("seed").copied().unwrap_or(defaults.seed),
        infer_logit: matches.get_flag("infer-logit"),
        ..defaults
    }
}

fn main() {
    let matches = command().get_matches();

    env_logger::builder()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config_from_args(&matches);
    let timer = Timer::new("Analysis");

    match run(&config) {
        Ok(report) => {
            for path in &report.plots {
                log::info!("Figure: {}", path.display());
            }
        }
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    }

    drop(timer);
}
