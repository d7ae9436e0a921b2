//! Curve figures: chart model, SVG rendering and terminal previews.

pub mod ascii;
pub mod chart;
pub mod svg;

pub use ascii::render_ascii_plot;
pub use chart::*;
pub use svg::{DEFAULT_SIZE, render_svg};
