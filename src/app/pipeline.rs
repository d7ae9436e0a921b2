//! Report pipeline shared by the `figures`, `readme` and `all` commands.
//!
//! Each step takes the explicit `ReportConfig` and returns what it produced,
//! so the steps can be tested against a temporary directory.

use std::path::PathBuf;

use crate::domain::{CurveKind, ReportConfig};
use crate::error::AppError;
use crate::io::{ensure_dir, read_text, write_text};
use crate::plot::{self, Chart};
use crate::report;

/// Build the four standard figures, keyed by file stem.
pub fn build_figures(config: &ReportConfig) -> Result<Vec<(&'static str, Chart)>, AppError> {
    let usage_split = config
        .intro_splits
        .first()
        .copied()
        .ok_or_else(|| AppError::new(2, "At least one intro split is needed for the usage figure."))?;

    Ok(vec![
        (
            "expo",
            plot::expo_family(CurveKind::Cubic, &config.family_rates, config.resolution)?,
        ),
        (
            "split",
            plot::split_family(
                CurveKind::Cubic,
                &config.family_rates,
                &config.intro_splits,
                config.resolution,
            )?,
        ),
        (
            "expo5",
            plot::expo_family(CurveKind::Quintic, &config.family_rates, config.resolution)?,
        ),
        (
            "usage",
            plot::usage_example(usage_split, config.resolution, config.table_points)?,
        ),
    ])
}

/// Render every figure to `<img_dir>/<stem>.svg`.
pub fn write_figures(config: &ReportConfig) -> Result<Vec<PathBuf>, AppError> {
    ensure_dir(&config.img_dir)?;

    let mut written = Vec::new();
    for (stem, chart) in build_figures(config)? {
        let path = config.img_dir.join(format!("{stem}.svg"));
        tracing::debug!(figure = stem, series = chart.series.len(), "rendering figure");
        let svg = plot::render_svg(&chart, config.figure_size)?;
        write_text(&path, &svg)?;
        written.push(path);
    }
    Ok(written)
}

/// The intro tables: one per intro split pair.
pub fn intro_tables(config: &ReportConfig) -> Result<String, AppError> {
    let mut out = String::new();
    for split in &config.intro_splits {
        out.push_str(&report::exp_table(config.table_points, split.down, split.up)?);
    }
    Ok(out)
}

/// Read the intro, append the table grid and write the README.
pub fn write_readme(config: &ReportConfig) -> Result<PathBuf, AppError> {
    let intro = read_text(&config.intro_path)?;
    let tables = report::readme_tables(config.table_points, &config.readme_downs, &config.readme_ups)?;
    tracing::debug!(tables = tables.len(), "assembled README tables");

    let readme = report::assemble_readme(&intro, &tables);
    write_text(&config.readme_path, &readme)?;
    Ok(config.readme_path.clone())
}
