//! Curve engine errors.

use thiserror::Error;

/// Errors raised by the curve engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// A sample needs at least both endpoints.
    #[error("Invalid point count {count}: at least 2 points are needed to span [-100, 100]")]
    InvalidPointCount { count: usize },
}

pub type Result<T, E = CurveError> = std::result::Result<T, E>;
