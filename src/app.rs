//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the report configuration (defaults, environment, flags)
//! - prints tables and terminal plots
//! - writes figures, CSV exports and the README

use clap::Parser;

use crate::cli::{Command, OutputArgs, PlotArgs, TableArgs};
use crate::curve;
use crate::domain::ReportConfig;
use crate::error::AppError;
use crate::plot::{self, Chart};

pub mod pipeline;

/// Entry point for the `expo` binary.
pub fn run() -> Result<(), AppError> {
    // `expo` on its own regenerates everything, like running the report
    // script. Clap requires a subcommand name, so argv is rewritten first.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Table(args) => handle_table(args),
        Command::Plot(args) => handle_plot(args),
        Command::Figures(args) => handle_figures(args),
        Command::Readme(args) => handle_readme(args),
        Command::All(args) => handle_all(args),
    }
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let sample = curve::generate_table(args.points, args.down, args.up)?;
    let table = crate::report::format_markdown_table(
        &crate::report::table_name(args.down, args.up),
        &crate::report::XY_HEADERS,
        &sample,
    );
    print!("{table}");

    if let Some(path) = &args.csv {
        crate::io::write_sample_csv(path, &sample)?;
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let chart = plot_chart(&args)?;
    println!("{}", plot::render_ascii_plot(&chart, args.width, args.height));
    Ok(())
}

fn handle_figures(args: OutputArgs) -> Result<(), AppError> {
    let config = report_config(&args)?;
    pipeline::write_figures(&config)?;
    Ok(())
}

fn handle_readme(args: OutputArgs) -> Result<(), AppError> {
    let config = report_config(&args)?;
    pipeline::write_readme(&config)?;
    Ok(())
}

fn handle_all(args: OutputArgs) -> Result<(), AppError> {
    let config = report_config(&args)?;
    let figures = pipeline::write_figures(&config)?;
    print!("{}", pipeline::intro_tables(&config)?);
    let readme = pipeline::write_readme(&config)?;
    tracing::info!(figures = figures.len(), readme = %readme.display(), "report complete");
    Ok(())
}

/// Chart for `expo plot`.
///
/// - one split with `--points`: the split curve with its table points marked
/// - any splits: the `--kind` family over `--rate` (possibly empty) plus the split curves
/// - otherwise: the `--kind` family over `--rate` (default 0..100 step 25)
pub fn plot_chart(args: &PlotArgs) -> Result<Chart, AppError> {
    let chart = match (args.splits.as_slice(), args.points) {
        ([split], Some(points)) => plot::usage_example(*split, args.resolution, points)?,
        (_, Some(_)) => {
            return Err(AppError::new(2, "--points needs exactly one --split."));
        }
        ([], None) => {
            let rates = if args.rates.is_empty() {
                ReportConfig::default().family_rates
            } else {
                args.rates.clone()
            };
            plot::expo_family(args.kind, &rates, args.resolution)?
        }
        (splits, None) => plot::split_family(args.kind, &args.rates, splits, args.resolution)?,
    };
    Ok(chart)
}

/// Resolve the report configuration: defaults < environment < flags.
pub fn report_config(args: &OutputArgs) -> Result<ReportConfig, AppError> {
    let mut config = ReportConfig::from_env()?;
    if let Some(dir) = &args.img_dir {
        config.img_dir = dir.clone();
    }
    if let Some(path) = &args.intro {
        config.intro_path = path.clone();
    }
    if let Some(path) = &args.out {
        config.readme_path = path.clone();
    }
    if let Some(size) = args.size {
        config.figure_size = size;
    }
    tracing::debug!(?config, "report configuration");
    Ok(config)
}

/// Rewrite argv so `expo` defaults to `expo all`.
///
/// Rules:
/// - `expo`                        -> `expo all`
/// - `expo --img-dir out ...`      -> `expo all --img-dir out ...`
/// - `expo --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("all".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "all".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::plot::SeriesStyle;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn plot_args(args: &[&str]) -> PlotArgs {
        let mut full = vec!["expo", "plot"];
        full.extend_from_slice(args);
        match Cli::parse_from(full).command {
            Command::Plot(args) => args,
            other => panic!("expected plot, got {other:?}"),
        }
    }

    #[test]
    fn bare_invocation_runs_everything() {
        assert_eq!(rewrite_args(argv(&["expo"])), argv(&["expo", "all"]));
        assert_eq!(
            rewrite_args(argv(&["expo", "--img-dir", "out"])),
            argv(&["expo", "all", "--img-dir", "out"])
        );
        assert_eq!(rewrite_args(argv(&["expo", "--help"])), argv(&["expo", "--help"]));
        assert_eq!(rewrite_args(argv(&["expo", "table"])), argv(&["expo", "table"]));
    }

    #[test]
    fn default_plot_is_cubic_family() {
        let chart = plot_chart(&plot_args(&[])).unwrap();
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "25%", "50%", "75%", "100%"]);
    }

    #[test]
    fn single_split_with_points_marks_table() {
        let chart = plot_chart(&plot_args(&["--split", "15:25", "--points", "7"])).unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[1].style, SeriesStyle::Markers);
        assert_eq!(chart.series[1].points.len(), 7);
    }

    #[test]
    fn splits_with_rates_combine() {
        let chart = plot_chart(&plot_args(&["-r", "50", "-s", "15:25", "-s", "50:75"])).unwrap();
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["50%", "-15+25", "-50+75"]);
    }

    #[test]
    fn points_with_many_splits_is_rejected() {
        let err = plot_chart(&plot_args(&["-s", "15:25", "-s", "50:75", "--points", "7"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn points_without_split_is_rejected() {
        let err = plot_chart(&plot_args(&["--points", "7"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn kind_applies_to_rates_next_to_splits() {
        let chart = plot_chart(&plot_args(&["--kind", "quintic", "-r", "100", "-s", "15:25"])).unwrap();
        let family = &chart.series[0];
        assert_eq!(family.label, "100%");
        for p in &family.points {
            assert_eq!(p.y, crate::curve::quintic_blend(p.x, 100.0));
        }
        let split = &chart.series[1];
        for p in &split.points {
            assert_eq!(p.y, crate::curve::split_blend(p.x, 15.0, 25.0));
        }
    }

    #[test]
    fn one_point_plot_is_curve_error() {
        let err = plot_chart(&plot_args(&["-s", "15:25", "--points", "1"])).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
