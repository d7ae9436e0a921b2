//! ASCII plotting for terminal previews.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - line series: the series index digit (`0`-`9`, cycling)
//! - marker series: `o`

use crate::plot::chart::{Chart, SeriesStyle};

/// Render `chart` onto a `width` x `height` character grid, followed by a legend.
pub fn render_ascii_plot(chart: &Chart, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let [x_min, x_max] = chart.x_bounds;
    let [y_min, y_max] = chart.y_bounds;

    let mut grid = vec![vec![' '; width]; height];

    // Lines first so markers can overlay.
    for (i, series) in chart.series.iter().enumerate() {
        if series.style == SeriesStyle::Line {
            let points: Vec<(f64, f64)> = series.points.iter().map(|p| p.as_tuple()).collect();
            draw_curve(&mut grid, &points, [x_min, x_max], [y_min, y_max], series_char(i, series.style));
        }
    }
    for series in chart.series.iter().filter(|s| s.style == SeriesStyle::Markers) {
        for p in &series.points {
            let x = map_x(p.x, x_min, x_max, width);
            let y = map_y(p.y, y_min, y_max, height);
            grid[y][x] = 'o';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.1}, {x_max:.1}] | y=[{y_min:.1}, {y_max:.1}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    for (i, series) in chart.series.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", series_char(i, series.style), series.label));
    }

    out
}

fn series_char(index: usize, style: SeriesStyle) -> char {
    match style {
        SeriesStyle::Markers => 'o',
        SeriesStyle::Line => std::char::from_digit((index % 10) as u32, 10).unwrap_or('-'),
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_bounds: [f64; 2], y_bounds: [f64; 2], ch: char) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_bounds[0], x_bounds[1], width);
        let row = map_y(y, y_bounds[0], y_bounds[1], height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, ch);
        } else if grid[row][col] == ' ' {
            grid[row][col] = ch;
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish). Never overwrites an occupied cell.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
