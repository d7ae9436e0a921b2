//! README assembly: intro document followed by a grid of split-rate tables.

use rayon::prelude::*;

use crate::curve::CurveError;
use crate::report::table::exp_table;

/// One table per `(down, up)` pair, down-major (outer loop over `downs`).
///
/// Tables are rendered in parallel and returned in grid order.
pub fn readme_tables(points: usize, downs: &[f64], ups: &[f64]) -> Result<Vec<String>, CurveError> {
    let pairs: Vec<(f64, f64)> = downs
        .iter()
        .flat_map(|&down| ups.iter().map(move |&up| (down, up)))
        .collect();

    pairs
        .par_iter()
        .map(|&(down, up)| exp_table(points, down, up))
        .collect()
}

/// Intro text verbatim, then every table in order.
pub fn assemble_readme(intro: &str, tables: &[String]) -> String {
    let mut out = String::with_capacity(intro.len() + tables.iter().map(String::len).sum::<usize>());
    out.push_str(intro);
    for t in tables {
        out.push_str(t);
    }
    out
}
