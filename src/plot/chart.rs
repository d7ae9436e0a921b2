//! Render-independent chart description and the standard curve figures.
//!
//! Series and bounds are computed here; the SVG and ASCII renderers only draw.

use crate::curve::{self, CurveError};
use crate::domain::{CurveKind, CurvePoint, SplitRate};
use crate::report::{rate_label, split_label};

/// Axis limits of every figure (%). Slightly wider than stick travel.
pub const AXIS_LIMIT: f64 = 110.0;

pub const X_LABEL: &str = "Stick position (%)";
pub const Y_LABEL: &str = "Output position (%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Markers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<CurvePoint>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn line(label: impl Into<String>, points: Vec<CurvePoint>) -> Self {
        Self {
            label: label.into(),
            points,
            style: SeriesStyle::Line,
        }
    }

    pub fn markers(label: impl Into<String>, points: Vec<CurvePoint>) -> Self {
        Self {
            label: label.into(),
            points,
            style: SeriesStyle::Markers,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_label: String,
    pub y_label: String,
    /// X bounds (stick %).
    pub x_bounds: [f64; 2],
    /// Y bounds (output %).
    pub y_bounds: [f64; 2],
}

impl Chart {
    /// Empty chart with the standard stick/output axes.
    pub fn stick_axes() -> Self {
        Self {
            series: Vec::new(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x_bounds: [-AXIS_LIMIT, AXIS_LIMIT],
            y_bounds: [-AXIS_LIMIT, AXIS_LIMIT],
        }
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }
}

/// Single-rate family: one line per rate, labelled `<rate>%`.
pub fn expo_family(kind: CurveKind, rates: &[f64], resolution: usize) -> Result<Chart, CurveError> {
    let mut chart = Chart::stick_axes();
    for &rate in rates {
        let points = curve::sample_fn(resolution, |x| kind.eval(x, rate))?;
        chart.push(Series::line(rate_label(rate), points));
    }
    Ok(chart)
}

/// `kind` family plus one line per split pair, labelled `-<down>+<up>`.
///
/// Split curves are always cubic.
pub fn split_family(
    kind: CurveKind,
    rates: &[f64],
    splits: &[SplitRate],
    resolution: usize,
) -> Result<Chart, CurveError> {
    let mut chart = expo_family(kind, rates, resolution)?;
    for &split in splits {
        let points = curve::sample_fn(resolution, |x| split.eval(x))?;
        chart.push(Series::line(split_label(split.down, split.up), points));
    }
    Ok(chart)
}

/// A split curve with the table sample points marked on it.
pub fn usage_example(split: SplitRate, resolution: usize, table_points: usize) -> Result<Chart, CurveError> {
    let mut chart = Chart::stick_axes();
    let line = curve::sample_fn(resolution, |x| split.eval(x))?;
    chart.push(Series::line(split_label(split.down, split.up), line));
    let marks = curve::generate_table(table_points, split.down, split.up)?;
    chart.push(Series::markers("curve points", marks));
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expo_family_labels_and_sizes() {
        let rates = curve::lin_space(0.0, 100.0, 5).unwrap();
        let chart = expo_family(CurveKind::Cubic, &rates, 100).unwrap();
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "25%", "50%", "75%", "100%"]);
        assert!(chart.series.iter().all(|s| s.points.len() == 100));
        assert!(chart.series.iter().all(|s| s.style == SeriesStyle::Line));
        assert_eq!(chart.x_bounds, [-110.0, 110.0]);
        assert_eq!(chart.x_label, "Stick position (%)");
    }

    #[test]
    fn split_family_appends_split_curves() {
        let splits = [SplitRate::new(15.0, 25.0), SplitRate::new(50.0, 75.0)];
        let chart = split_family(CurveKind::Cubic, &[0.0, 100.0], &splits, 50).unwrap();
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "100%", "-15+25", "-50+75"]);
    }

    #[test]
    fn usage_example_marks_table_points() {
        let chart = usage_example(SplitRate::new(15.0, 25.0), 100, 7).unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label, "-15+25");
        assert_eq!(chart.series[1].label, "curve points");
        assert_eq!(chart.series[1].style, SeriesStyle::Markers);
        assert_eq!(chart.series[1].points, curve::generate_table(7, 15.0, 25.0).unwrap());
    }

    #[test]
    fn figures_reject_degenerate_resolution() {
        assert!(expo_family(CurveKind::Quintic, &[50.0], 1).is_err());
        assert!(usage_example(SplitRate::new(1.0, 2.0), 100, 1).is_err());
    }
}
