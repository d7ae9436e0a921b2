//! Text reports: markdown curve tables and README assembly.
//!
//! Formatting lives here so the curve engine stays free of presentation code.

pub mod readme;
pub mod table;

pub use readme::*;
pub use table::*;
