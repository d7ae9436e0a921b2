//! `rc-expo` library crate.
//!
//! The binary (`expo`) is a thin wrapper around this library so that:
//!
//! - the curve math is testable without spawning processes
//! - the report pipeline can be driven from other tools
//! - presentation (tables, plots, files) stays out of the curve engine

pub mod app;
pub mod cli;
pub mod curve;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
