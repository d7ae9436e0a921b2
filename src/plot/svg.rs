//! Plotters-powered SVG rendering of curve charts.
//!
//! The SVG backend writes text as `<text>` elements, so no system fonts are
//! needed. The drawing area is square and both label areas have the same size,
//! which keeps the plot aspect equal (one stick percent is the same length on
//! both axes).

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::AppError;
use crate::plot::chart::{Chart, SeriesStyle};

/// Default side length of rendered figures (pixels).
pub const DEFAULT_SIZE: u32 = 720;

const LABEL_AREA: u32 = 50;
const MARKER_RADIUS: i32 = 4;

/// Render `chart` to an SVG document.
pub fn render_svg(chart: &Chart, size: u32) -> Result<String, AppError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (size, size)).into_drawing_area();
        draw(&root, chart).map_err(|e| AppError::new(3, format!("Failed to render chart: {e}")))?;
    }
    Ok(buf)
}

fn draw(root: &DrawingArea<SVGBackend<'_>, Shift>, chart: &Chart) -> Result<(), Box<dyn Error>> {
    let [x0, x1] = chart.x_bounds;
    let [y0, y1] = chart.y_bounds;
    if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
        return Err(format!("invalid chart bounds x=[{x0}, {x1}] y=[{y0}, {y1}]").into());
    }

    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(root)
        .margin(15)
        .set_label_area_size(LabelAreaPosition::Left, LABEL_AREA)
        .set_label_area_size(LabelAreaPosition::Bottom, LABEL_AREA)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_labels(11)
        .y_labels(11)
        .label_style(("sans-serif", 14))
        .draw()?;

    for (i, series) in chart.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let points = series.points.iter().map(|p| p.as_tuple());
        match series.style {
            SeriesStyle::Line => {
                ctx.draw_series(LineSeries::new(points, color.stroke_width(2)))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            }
            SeriesStyle::Markers => {
                ctx.draw_series(points.map(|p| Circle::new(p, MARKER_RADIUS, color.filled())))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, color.filled()));
            }
        }
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()?;

    root.present()?;
    Ok(())
}
