//! Shared domain types.
//!
//! Stick inputs and rates are plain `f64` percentages:
//!
//! - stick input: `[-100, 100]`, deflection from center (sign = direction)
//! - rate: `[0, 100]` by convention; values outside extrapolate the blend
//!
//! These types are kept small and `Copy` so they can be passed around freely
//! by the renderers and the report assembler.

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lower bound of stick travel (%).
pub const STICK_MIN: f64 = -100.0;

/// Upper bound of stick travel (%).
pub const STICK_MAX: f64 = 100.0;

/// Which polynomial the single-rate blend mixes with the straight line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CurveKind {
    /// `rate·x³ + (1 - rate)·x`, the usual transmitter expo.
    Cubic,
    /// `rate·x⁵ + (1 - rate)·x`, a flatter, wider center.
    Quintic,
}

impl CurveKind {
    /// Evaluate the single-rate blend of this kind.
    pub fn eval(self, x: f64, rate: f64) -> f64 {
        match self {
            CurveKind::Cubic => crate::curve::cubic_blend(x, rate),
            CurveKind::Quintic => crate::curve::quintic_blend(x, rate),
        }
    }
}

/// Independent expo for each half of stick travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRate {
    /// Rate applied for negative stick input.
    pub down: f64,
    /// Rate applied for positive stick input.
    pub up: f64,
}

impl SplitRate {
    pub fn new(down: f64, up: f64) -> Self {
        Self { down, up }
    }

    /// Evaluate the split cubic blend at `x`.
    pub fn eval(self, x: f64) -> f64 {
        crate::curve::split_blend(x, self.down, self.up)
    }
}

/// Parses `DOWN:UP`, e.g. `15:25`.
impl FromStr for SplitRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (down, up) = s
            .split_once(':')
            .ok_or_else(|| format!("expected DOWN:UP (e.g. 15:25), got '{s}'"))?;
        let down: f64 = down
            .trim()
            .parse()
            .map_err(|e| format!("invalid down rate '{down}': {e}"))?;
        let up: f64 = up
            .trim()
            .parse()
            .map_err(|e| format!("invalid up rate '{up}': {e}"))?;
        Ok(Self { down, up })
    }
}

/// One evaluated point of a shaping function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Stick input (%).
    pub x: f64,
    /// Output (%).
    pub y: f64,
}

impl CurvePoint {
    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Curve evaluated at evenly spaced inputs, ascending in `x`.
pub type CurveSample = Vec<CurvePoint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rate_parses_down_up() {
        let s: SplitRate = "15:25".parse().unwrap();
        assert_eq!(s, SplitRate::new(15.0, 25.0));

        let s: SplitRate = " 50 : 75.5 ".parse().unwrap();
        assert_eq!(s, SplitRate::new(50.0, 75.5));
    }

    #[test]
    fn split_rate_rejects_malformed() {
        assert!("15".parse::<SplitRate>().is_err());
        assert!("a:25".parse::<SplitRate>().is_err());
        assert!("15:".parse::<SplitRate>().is_err());
    }

    #[test]
    fn curve_kind_dispatches() {
        assert_eq!(CurveKind::Cubic.eval(50.0, 100.0), crate::curve::cubic_blend(50.0, 100.0));
        assert_eq!(CurveKind::Quintic.eval(50.0, 100.0), crate::curve::quintic_blend(50.0, 100.0));
    }
}
