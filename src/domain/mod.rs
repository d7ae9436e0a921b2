//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - curve selection enums (`CurveKind`)
//! - rate parameters (`SplitRate`)
//! - sampled curve output (`CurvePoint`, `CurveSample`)
//! - report configuration (`ReportConfig`)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
