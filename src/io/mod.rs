//! Input/output helpers.
//!
//! - text file read/write with path-aware errors (`files`)
//! - curve table CSV export (`export`)

pub mod export;
pub mod files;

pub use export::*;
pub use files::*;
