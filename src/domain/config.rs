//! Report configuration.
//!
//! Output locations come from (lowest to highest priority): built-in defaults,
//! the environment (a `.env` file is honoured), then command-line flags.

use std::path::PathBuf;

use crate::domain::SplitRate;
use crate::error::AppError;

pub const ENV_IMG_DIR: &str = "EXPO_IMG_DIR";
pub const ENV_INTRO: &str = "EXPO_INTRO";
pub const ENV_README: &str = "EXPO_README";

/// Everything needed to produce the figures and the README.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory receiving the SVG figures.
    pub img_dir: PathBuf,
    /// Markdown copied verbatim to the top of the README.
    pub intro_path: PathBuf,
    /// README output path.
    pub readme_path: PathBuf,
    /// Rates of the single-rate families (`expo`, `split`, `expo5` figures).
    pub family_rates: Vec<f64>,
    /// Split pairs drawn on the split figure and printed as intro tables.
    pub intro_splits: Vec<SplitRate>,
    /// Points per plotted curve.
    pub resolution: usize,
    /// Points per table.
    pub table_points: usize,
    /// Down rates of the README table grid.
    pub readme_downs: Vec<f64>,
    /// Up rates of the README table grid.
    pub readme_ups: Vec<f64>,
    /// Figure side length (pixels).
    pub figure_size: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let grid: Vec<f64> = (0..=10).map(|i| i as f64 * 5.0).collect();
        Self {
            img_dir: PathBuf::from("img"),
            intro_path: PathBuf::from("intro.md"),
            readme_path: PathBuf::from("README.md"),
            family_rates: vec![0.0, 25.0, 50.0, 75.0, 100.0],
            intro_splits: vec![SplitRate::new(15.0, 25.0), SplitRate::new(50.0, 75.0)],
            resolution: 100,
            table_points: 7,
            readme_downs: grid.clone(),
            readme_ups: grid,
            figure_size: crate::plot::DEFAULT_SIZE,
        }
    }
}

impl ReportConfig {
    /// Defaults overridden by `EXPO_*` variables from the environment / `.env`.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        for (key, slot) in [
            (ENV_IMG_DIR, &mut config.img_dir),
            (ENV_INTRO, &mut config.intro_path),
            (ENV_README, &mut config.readme_path),
        ] {
            if let Some(value) = var(key) {
                if value.trim().is_empty() {
                    return Err(AppError::new(2, format!("{key} is set but empty.")));
                }
                *slot = PathBuf::from(value);
            }
        }
        Ok(config)
    }
}
