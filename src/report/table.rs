//! Markdown table rendering for curve samples.

use crate::curve::{self, CurveError};
use crate::domain::CurvePoint;

/// Column headers used for every curve table.
pub const XY_HEADERS: [&str; 2] = ["X", "Y"];

/// Label for a single-rate curve, e.g. `25%`.
///
/// Rates are truncated to whole percent.
pub fn rate_label(rate: f64) -> String {
    format!("{}%", whole(rate))
}

/// Label for a split-rate curve, e.g. `-15+25`.
pub fn split_label(down: f64, up: f64) -> String {
    format!("-{}+{}", whole(down), whole(up))
}

/// Table title for a split-rate table, e.g. `down 15% + up25%`.
pub fn table_name(down: f64, up: f64) -> String {
    format!("down {}% + up{}%", whole(down), whole(up))
}

/// Sample a split-rate curve at `points` inputs and render it as a markdown table.
pub fn exp_table(points: usize, down: f64, up: f64) -> Result<String, CurveError> {
    let sample = curve::generate_table(points, down, up)?;
    Ok(format_markdown_table(&table_name(down, up), &XY_HEADERS, &sample))
}

/// Render a titled markdown table of curve points.
///
/// Numbers use two decimals and are right-aligned; every column is padded to
/// its widest cell with a one-space margin. The output ends with a blank line
/// so tables can be concatenated.
pub fn format_markdown_table(name: &str, headers: &[&str; 2], rows: &[CurvePoint]) -> String {
    let cells: Vec<[String; 2]> = rows
        .iter()
        .map(|p| [format!("{:.2}", p.x), format!("{:.2}", p.y)])
        .collect();

    let mut widths = [0usize; 2];
    for (i, w) in widths.iter_mut().enumerate() {
        *w = cells
            .iter()
            .map(|c| c[i].len())
            .chain(std::iter::once(headers[i].len()))
            .max()
            .unwrap_or(0)
            .max(3);
    }

    let mut out = String::new();
    out.push_str(&format!("# {name}\n"));
    out.push_str(&format!(
        "| {:^w0$} | {:^w1$} |\n",
        headers[0],
        headers[1],
        w0 = widths[0],
        w1 = widths[1]
    ));
    out.push_str(&format!(
        "| {:->w0$} | {:->w1$} |\n",
        ":",
        ":",
        w0 = widths[0],
        w1 = widths[1]
    ));
    for [x, y] in &cells {
        out.push_str(&format!(
            "| {x:>w0$} | {y:>w1$} |\n",
            w0 = widths[0],
            w1 = widths[1]
        ));
    }
    out.push('\n');
    out
}

fn whole(v: f64) -> i64 {
    v.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_truncate_to_whole_percent() {
        assert_eq!(rate_label(25.0), "25%");
        assert_eq!(rate_label(37.5), "37%");
        assert_eq!(split_label(15.0, 25.0), "-15+25");
        assert_eq!(table_name(15.0, 25.0), "down 15% + up25%");
    }

    #[test]
    fn markdown_table_golden() {
        let txt = exp_table(3, 0.0, 100.0).unwrap();
        let expected = concat!(
            "# down 0% + up100%\n",
            "|    X    |    Y    |\n",
            "| ------: | ------: |\n",
            "| -100.00 | -100.00 |\n",
            "|    0.00 |    0.00 |\n",
            "|  100.00 |  100.00 |\n",
            "\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn intro_table_rows() {
        let txt = exp_table(7, 15.0, 25.0).unwrap();
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "# down 15% + up25%");
        // title, header, separator, 7 rows, blank
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[7], "|   33.33 |   25.93 |");
        assert_eq!(lines[5], "|  -33.33 |  -28.89 |");
    }

    #[test]
    fn table_rejects_single_point() {
        assert_eq!(
            exp_table(1, 15.0, 25.0),
            Err(CurveError::InvalidPointCount { count: 1 })
        );
    }
}
