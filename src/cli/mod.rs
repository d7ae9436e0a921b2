//! Command-line parsing for the expo curve tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! curve math and the report pipeline.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{CurveKind, SplitRate};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "expo", version, about = "RC transmitter expo curves: tables, figures and README")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one split-rate table as markdown (optionally export it as CSV).
    Table(TableArgs),
    /// Preview a curve family in the terminal.
    Plot(PlotArgs),
    /// Write the SVG figures (expo, split, expo5, usage).
    Figures(OutputArgs),
    /// Write the README: intro followed by the grid of split-rate tables.
    Readme(OutputArgs),
    /// Figures, intro tables on stdout, then the README.
    All(OutputArgs),
}

#[derive(Debug, Args, Clone)]
pub struct TableArgs {
    /// Number of table rows (>= 2), evenly spaced over [-100, 100].
    #[arg(short = 'n', long, default_value_t = 7)]
    pub points: usize,

    /// Expo (%) below center.
    #[arg(short = 'd', long, default_value_t = 15.0, allow_negative_numbers = true)]
    pub down: f64,

    /// Expo (%) above center.
    #[arg(short = 'u', long, default_value_t = 25.0, allow_negative_numbers = true)]
    pub up: f64,

    /// Also write the table to this CSV file.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Single-rate blend used for `--rate` curves (split curves are always cubic).
    #[arg(long, value_enum, default_value_t = CurveKind::Cubic)]
    pub kind: CurveKind,

    /// Expo rates (%) to draw; repeatable. Defaults to 0, 25, 50, 75, 100 when no split is given.
    #[arg(short = 'r', long = "rate", allow_negative_numbers = true)]
    pub rates: Vec<f64>,

    /// Split rates as DOWN:UP (e.g. 15:25); repeatable.
    #[arg(short = 's', long = "split", value_name = "DOWN:UP")]
    pub splits: Vec<SplitRate>,

    /// Mark this many table points on a single split curve (needs exactly one `--split`).
    #[arg(long)]
    pub points: Option<usize>,

    /// Points per curve.
    #[arg(long, default_value_t = 100)]
    pub resolution: usize,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 41)]
    pub height: usize,
}

/// Output locations; unset flags fall back to `EXPO_*` environment variables, then defaults.
#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Directory for SVG figures [env: EXPO_IMG_DIR] [default: img].
    #[arg(long, value_name = "DIR")]
    pub img_dir: Option<PathBuf>,

    /// Intro markdown copied to the top of the README [env: EXPO_INTRO] [default: intro.md].
    #[arg(long, value_name = "MD")]
    pub intro: Option<PathBuf>,

    /// README output path [env: EXPO_README] [default: README.md].
    #[arg(long, value_name = "MD")]
    pub out: Option<PathBuf>,

    /// Figure side length (pixels).
    #[arg(long)]
    pub size: Option<u32>,
}
